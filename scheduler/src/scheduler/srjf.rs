use super::{simulation::Simulation, Schedule, Scheduler, Ticks, Workload};
use log::debug;

/// Preemptive shortest remaining job first.
///
/// Decisions are per tick, but the chosen process can only lose its place
/// when something arrives, so it runs straight up to the next arrival.
/// Consecutive runs of the same process are merged into one interval.
pub fn srjf(workload: &Workload) -> Schedule {
    let mut sim = Simulation::new(workload);

    while !sim.is_finished() {
        match sim.select_min_by_key(|pid| sim.remaining(pid)) {
            Some(pid) => {
                let until_arrival = sim
                    .next_arrival()
                    .map_or(Ticks::MAX, |arrival| arrival - sim.now());
                sim.run_coalesced(pid, until_arrival);
            }
            None => sim.idle(),
        }
    }

    let schedule = sim.finish();
    debug!("{}: {}", ShortestRemainingJobFirst::NAME, schedule);
    schedule
}

pub struct ShortestRemainingJobFirst;

impl Scheduler for ShortestRemainingJobFirst {
    const NAME: &'static str = "Shortest Remaining Job First";

    fn schedule(&self, workload: &Workload) -> Schedule {
        srjf(workload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{spans, workload};

    #[test]
    fn shorter_arrival_preempts() {
        let workload = workload(&["A", "B"], &[8, 4], &[0, 1]);
        assert_eq!(
            spans(&srjf(&workload)),
            vec![("A", 0, 1), ("B", 1, 5), ("A", 5, 12)]
        );
    }

    #[test]
    fn equal_remaining_time_does_not_preempt_a_lower_pid() {
        let workload = workload(&["A", "B"], &[4, 3], &[0, 1]);
        assert_eq!(spans(&srjf(&workload)), vec![("A", 0, 4), ("B", 4, 7)]);
    }

    #[test]
    fn equal_remaining_time_preempts_for_a_lower_pid() {
        let workload = workload(&["A", "B"], &[3, 4], &[1, 0]);
        assert_eq!(
            spans(&srjf(&workload)),
            vec![("B", 0, 1), ("A", 1, 4), ("B", 4, 7)]
        );
    }

    #[test]
    fn preempts_in_the_middle_of_a_long_run() {
        let workload = workload(&["A", "B", "C"], &[10, 2, 1], &[0, 4, 5]);
        assert_eq!(
            spans(&srjf(&workload)),
            vec![("A", 0, 4), ("B", 4, 6), ("C", 6, 7), ("A", 7, 13)]
        );
    }

    #[test]
    fn huge_bursts_finish_in_few_steps() {
        let workload = workload(&["A", "B"], &[1_000_000_000_000, 3], &[0, 1_000]);
        assert_eq!(
            spans(&srjf(&workload)),
            vec![
                ("A", 0, 1_000),
                ("B", 1_000, 1_003),
                ("A", 1_003, 1_000_000_000_003),
            ]
        );
    }

    #[test]
    fn resumes_after_idle_gap() {
        let workload = workload(&["A", "B"], &[2, 2], &[0, 5]);
        assert_eq!(spans(&srjf(&workload)), vec![("A", 0, 2), ("B", 5, 7)]);
    }

    #[test]
    fn textbook_workload() {
        let workload = workload(&["P1", "P2", "P3", "P4"], &[8, 4, 9, 5], &[0, 1, 2, 3]);
        assert_eq!(
            spans(&srjf(&workload)),
            vec![
                ("P1", 0, 1),
                ("P2", 1, 5),
                ("P4", 5, 10),
                ("P1", 10, 17),
                ("P3", 17, 26),
            ]
        );
    }
}
