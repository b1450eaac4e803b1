use super::{Pid, Process, Ticks};
use std::num::NonZeroU64;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("the workload has no processes")]
    Empty,
    #[error("expected {expected} {column}, found {found}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("process {pid} has a negative burst time ({value})")]
    NegativeBurstTime { pid: Pid, value: i64 },
    #[error("process {pid} has a negative arrival time ({value})")]
    NegativeArrivalTime { pid: Pid, value: i64 },
    #[error("the time quantum must be at least 1, got {0}")]
    InvalidQuantum(i64),
    #[error("process at index {index} carries pid {pid}")]
    PidMismatch { index: usize, pid: Pid },
    #[error("the latest arrival plus the total burst time does not fit the clock")]
    TimelineOverflow,
}

/// The processes of one simulation run, indexed by pid.
///
/// A `Workload` only exists in a validated state, so the policies that
/// consume it never have to check their inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    pub fn with_processes(processes: Vec<Process>) -> Result<Self, WorkloadError> {
        if processes.is_empty() {
            return Err(WorkloadError::Empty);
        }

        if let Some((index, process)) = processes
            .iter()
            .enumerate()
            .find(|(index, process)| process.pid() != *index)
        {
            return Err(WorkloadError::PidMismatch {
                index,
                pid: process.pid(),
            });
        }

        // Every policy finishes by the latest arrival plus all the work.
        let latest_arrival = processes
            .iter()
            .map(Process::arrival_time)
            .max()
            .unwrap_or(0);
        processes
            .iter()
            .try_fold(latest_arrival, |end, process| {
                end.checked_add(process.burst_time())
            })
            .ok_or(WorkloadError::TimelineOverflow)?;

        Ok(Self { processes })
    }

    /// Builds a workload from the parallel columns an input form provides.
    ///
    /// Without a priority column every process gets the default priority.
    pub fn from_columns<S: AsRef<str>>(
        labels: &[S],
        burst_times: &[i64],
        arrival_times: &[i64],
        priorities: Option<&[i64]>,
    ) -> Result<Self, WorkloadError> {
        let expected = labels.len();
        if expected == 0 {
            return Err(WorkloadError::Empty);
        }

        check_length("burst times", expected, burst_times.len())?;
        check_length("arrival times", expected, arrival_times.len())?;
        if let Some(priorities) = priorities {
            check_length("priorities", expected, priorities.len())?;
        }

        let mut processes = Vec::with_capacity(expected);
        for (pid, label) in labels.iter().enumerate() {
            let burst_time = Ticks::try_from(burst_times[pid]).map_err(|_| {
                WorkloadError::NegativeBurstTime {
                    pid,
                    value: burst_times[pid],
                }
            })?;
            let arrival_time = Ticks::try_from(arrival_times[pid]).map_err(|_| {
                WorkloadError::NegativeArrivalTime {
                    pid,
                    value: arrival_times[pid],
                }
            })?;

            processes.push(match priorities {
                Some(priorities) => Process::with_priority(
                    pid,
                    label.as_ref(),
                    burst_time,
                    arrival_time,
                    priorities[pid],
                ),
                None => Process::named(pid, label.as_ref(), burst_time, arrival_time),
            });
        }

        Workload::with_processes(processes)
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, pid: Pid) -> &Process {
        &self.processes[pid]
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn total_burst_time(&self) -> Ticks {
        self.processes.iter().map(Process::burst_time).sum()
    }

    pub fn max_burst_time(&self) -> Ticks {
        self.processes
            .iter()
            .map(Process::burst_time)
            .max()
            .unwrap_or(0)
    }
}

pub fn quantum(value: i64) -> Result<NonZeroU64, WorkloadError> {
    u64::try_from(value)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or(WorkloadError::InvalidQuantum(value))
}

fn check_length(column: &'static str, expected: usize, found: usize) -> Result<(), WorkloadError> {
    if expected != found {
        return Err(WorkloadError::LengthMismatch {
            column,
            expected,
            found,
        });
    }
    Ok(())
}
