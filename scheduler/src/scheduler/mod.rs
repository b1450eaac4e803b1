mod chart;
mod display;
mod fcfs;
mod priority;
mod process;
mod round_robin;
mod runner;
mod schedule;
mod simulation;
mod sjf;
mod srjf;
mod stats;
mod workload;

use clap::ValueEnum;
use log::debug;
use std::{fmt, num::NonZeroU64, thread, time::Duration};

pub use chart::{bar_widths, render_plain, PALETTE};
pub use display::{DisplayTerminal, ReplayFrame};
pub use fcfs::{fcfs, FirstComeFirstServed};
pub use priority::{priority_scheduling, PriorityScheduler};
pub use process::Process;
pub use round_robin::{round_robin, RoundRobinScheduler};
pub use runner::{RunnerEvent, ScheduleRunner};
pub use schedule::{ExecutionInterval, Schedule};
pub use sjf::{sjf, ShortestJobFirst};
pub use srjf::{srjf, ShortestRemainingJobFirst};
pub use stats::{ProcessStats, Statistics};
pub use workload::{quantum, Workload, WorkloadError};

/// Simulated clock unit.
pub type Ticks = u64;
/// Index of a process within its workload.
pub type Pid = usize;

const DEFAULT_TICK_RATE: Duration = Duration::from_millis(500);

pub trait Scheduler {
    const NAME: &'static str;

    fn schedule(&self, workload: &Workload) -> Schedule;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    #[value(name = "fcfs")]
    FirstComeFirstServed,
    #[value(name = "sjf")]
    ShortestJobFirst,
    #[value(name = "srjf")]
    ShortestRemainingJobFirst,
    #[value(name = "rr")]
    RoundRobin,
    #[value(name = "priority")]
    Priority,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::FirstComeFirstServed,
        Algorithm::ShortestJobFirst,
        Algorithm::ShortestRemainingJobFirst,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::FirstComeFirstServed => FirstComeFirstServed::NAME,
            Algorithm::ShortestJobFirst => ShortestJobFirst::NAME,
            Algorithm::ShortestRemainingJobFirst => ShortestRemainingJobFirst::NAME,
            Algorithm::RoundRobin => RoundRobinScheduler::NAME,
            Algorithm::Priority => PriorityScheduler::NAME,
        }
    }

    /// The quantum is only consulted by round robin.
    pub fn schedule(self, workload: &Workload, quantum: NonZeroU64) -> Schedule {
        match self {
            Algorithm::FirstComeFirstServed => FirstComeFirstServed.schedule(workload),
            Algorithm::ShortestJobFirst => ShortestJobFirst.schedule(workload),
            Algorithm::ShortestRemainingJobFirst => ShortestRemainingJobFirst.schedule(workload),
            Algorithm::RoundRobin => RoundRobinScheduler::new(quantum).schedule(workload),
            Algorithm::Priority => PriorityScheduler.schedule(workload),
        }
    }

    pub fn next(self) -> Self {
        let index = Algorithm::ALL
            .iter()
            .position(|&algorithm| algorithm == self)
            .unwrap_or(0);
        Algorithm::ALL[(index + 1) % Algorithm::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs every algorithm over the same workload, one scoped thread each.
///
/// Results come back in `Algorithm::ALL` order.
pub fn compare_all(workload: &Workload, quantum: NonZeroU64) -> Vec<(Algorithm, Schedule)> {
    thread::scope(|scope| {
        let handles: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                scope.spawn(move || (algorithm, algorithm.schedule(workload, quantum)))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .inspect(|(algorithm, schedule)| {
                debug!("{} finished with {} intervals", algorithm, schedule.len())
            })
            .collect()
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::workload;
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn algorithms_cycle() {
        let mut algorithm = Algorithm::FirstComeFirstServed;
        for _ in 0..Algorithm::ALL.len() {
            algorithm = algorithm.next();
        }
        assert_eq!(algorithm, Algorithm::FirstComeFirstServed);
        assert_eq!(Algorithm::Priority.next(), Algorithm::FirstComeFirstServed);
    }

    #[test]
    fn compare_matches_individual_runs() {
        let workload = workload(&["A", "B", "C"], &[5, 3, 1], &[0, 1, 2]);
        let quantum = NonZeroU64::new(2).unwrap();

        let results = compare_all(&workload, quantum);
        assert_eq!(results.len(), Algorithm::ALL.len());
        for (algorithm, schedule) in results {
            assert_eq!(schedule, algorithm.schedule(&workload, quantum));
        }
        assert_eq!(workload.process(0).burst_time(), 5);
    }

    #[test]
    fn names_come_from_the_schedulers() {
        assert_eq!(Algorithm::RoundRobin.to_string(), "Round Robin Scheduler");
        assert_eq!(
            Algorithm::from_str("srjf", true),
            Ok(Algorithm::ShortestRemainingJobFirst)
        );
    }
}
