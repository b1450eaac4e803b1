use super::{simulation::Simulation, Pid, Schedule, Scheduler, Workload};
use log::debug;
use std::{collections::VecDeque, num::NonZeroU64};

pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> NonZeroU64 {
        self.quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin Scheduler";

    fn schedule(&self, workload: &Workload) -> Schedule {
        round_robin(workload, self.quantum)
    }
}

/// Preemptive round robin over a FIFO ready queue.
///
/// Every dispatch runs for at most `quantum` ticks and is recorded as its
/// own interval, even when the same process is dispatched again right away.
/// Processes that arrive while a slice runs join the queue ahead of the
/// preempted process.
pub fn round_robin(workload: &Workload, quantum: NonZeroU64) -> Schedule {
    let mut sim = Simulation::new(workload);
    let mut ready_queue: VecDeque<Pid> = VecDeque::with_capacity(workload.len());
    // A process enters the queue once on arrival and then circulates
    // until it completes.
    let mut admitted = vec![false; workload.len()];

    while !sim.is_finished() {
        admit_arrivals(&sim, &mut ready_queue, &mut admitted);

        let Some(pid) = ready_queue.pop_front() else {
            sim.idle();
            continue;
        };

        let completed = sim.run_for(pid, quantum.get());
        admit_arrivals(&sim, &mut ready_queue, &mut admitted);
        if !completed {
            ready_queue.push_back(pid);
        }
    }

    let schedule = sim.finish();
    debug!(
        "{} (quantum {}): {}",
        RoundRobinScheduler::NAME,
        quantum,
        schedule
    );
    schedule
}

fn admit_arrivals(sim: &Simulation<'_>, ready_queue: &mut VecDeque<Pid>, admitted: &mut [bool]) {
    for pid in sim.ready() {
        if !admitted[pid] {
            admitted[pid] = true;
            ready_queue.push_back(pid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{spans, workload};

    fn quantum(ticks: u64) -> NonZeroU64 {
        NonZeroU64::new(ticks).unwrap()
    }

    #[test]
    fn cycles_through_the_ready_queue() {
        let workload = workload(&["A", "B", "C"], &[5, 3, 1], &[0, 0, 0]);
        assert_eq!(
            spans(&round_robin(&workload, quantum(2))),
            vec![
                ("A", 0, 2),
                ("B", 2, 4),
                ("C", 4, 5),
                ("A", 5, 7),
                ("B", 7, 8),
                ("A", 8, 9),
            ]
        );
    }

    #[test]
    fn keeps_back_to_back_slices_separate() {
        let workload = workload(&["A"], &[5], &[0]);
        assert_eq!(
            spans(&round_robin(&workload, quantum(2))),
            vec![("A", 0, 2), ("A", 2, 4), ("A", 4, 5)]
        );
    }

    // B arrives mid-slice and is queued ahead of A, which goes to the tail.
    #[test]
    fn arrivals_during_a_slice_queue_before_the_preempted_process() {
        let workload = workload(&["A", "B"], &[4, 2], &[0, 1]);
        assert_eq!(
            spans(&round_robin(&workload, quantum(2))),
            vec![("A", 0, 2), ("B", 2, 4), ("A", 4, 6)]
        );
    }

    #[test]
    fn idles_until_the_next_arrival() {
        let workload = workload(&["A", "B"], &[1, 3], &[2, 6]);
        assert_eq!(
            spans(&round_robin(&workload, quantum(2))),
            vec![("A", 2, 3), ("B", 6, 8), ("B", 8, 9)]
        );
    }

    #[test]
    fn large_quantum_runs_each_process_once() {
        let workload = workload(&["A", "B", "C"], &[5, 3, 8], &[0, 1, 2]);
        assert_eq!(
            spans(&round_robin(&workload, quantum(8))),
            vec![("A", 0, 5), ("B", 5, 8), ("C", 8, 16)]
        );
    }

    #[test]
    fn scheduler_uses_its_quantum() {
        let workload = workload(&["A"], &[3], &[0]);
        let scheduler = RoundRobinScheduler::new(quantum(1));
        assert_eq!(scheduler.quantum().get(), 1);
        assert_eq!(scheduler.schedule(&workload).len(), 3);
    }
}
