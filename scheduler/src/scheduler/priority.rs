use super::{simulation::Simulation, Schedule, Scheduler, Workload};
use log::debug;

/// Non-preemptive priority scheduling. The ready process with the lowest
/// priority value runs to completion; equal priorities go to the lowest pid.
pub fn priority_scheduling(workload: &Workload) -> Schedule {
    let mut sim = Simulation::new(workload);

    while !sim.is_finished() {
        match sim.select_min_by_key(|pid| workload.process(pid).priority()) {
            Some(pid) => sim.run_to_completion(pid),
            None => sim.idle(),
        }
    }

    let schedule = sim.finish();
    debug!("{}: {}", PriorityScheduler::NAME, schedule);
    schedule
}

pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    const NAME: &'static str = "Priority Scheduler";

    fn schedule(&self, workload: &Workload) -> Schedule {
        priority_scheduling(workload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{spans, workload_with_priorities};

    #[test]
    fn lowest_value_runs_first() {
        let workload =
            workload_with_priorities(&["A", "B", "C"], &[3, 2, 4], &[0, 0, 0], &[3, 1, 2]);
        assert_eq!(
            spans(&priority_scheduling(&workload)),
            vec![("B", 0, 2), ("C", 2, 6), ("A", 6, 9)]
        );
    }

    #[test]
    fn equal_priorities_go_to_the_lowest_index() {
        let workload = workload_with_priorities(&["A", "B", "C"], &[3, 2, 1], &[0, 0, 0], &[1, 1, 1]);
        assert_eq!(
            spans(&priority_scheduling(&workload)),
            vec![("A", 0, 3), ("B", 3, 5), ("C", 5, 6)]
        );
    }

    #[test]
    fn urgent_arrival_waits_for_the_running_process() {
        let workload = workload_with_priorities(&["A", "B"], &[5, 2], &[0, 1], &[9, -3]);
        assert_eq!(
            spans(&priority_scheduling(&workload)),
            vec![("A", 0, 5), ("B", 5, 7)]
        );
    }

    #[test]
    fn idles_until_the_next_arrival() {
        let workload = workload_with_priorities(&["A", "B"], &[1, 1], &[3, 3], &[2, 1]);
        assert_eq!(
            spans(&priority_scheduling(&workload)),
            vec![("B", 3, 4), ("A", 4, 5)]
        );
    }
}
