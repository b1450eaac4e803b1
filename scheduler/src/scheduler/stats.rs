use super::{Pid, Schedule, Ticks, Workload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStats {
    pub pid: Pid,
    pub name: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i64,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub processes: Vec<ProcessStats>,
    pub average_turnaround_time: f64,
    pub average_waiting_time: f64,
}

impl Statistics {
    /// Turnaround is completion minus arrival, waiting is turnaround minus
    /// burst. A process that never ran completes on arrival.
    pub fn compute(workload: &Workload, schedule: &Schedule) -> Self {
        let processes: Vec<ProcessStats> = workload
            .processes()
            .iter()
            .map(|process| {
                let completion_time = schedule
                    .completion_time(process.pid())
                    .unwrap_or(process.arrival_time());
                let turnaround_time = completion_time.saturating_sub(process.arrival_time());

                ProcessStats {
                    pid: process.pid(),
                    name: process.name().to_owned(),
                    arrival_time: process.arrival_time(),
                    burst_time: process.burst_time(),
                    priority: process.priority(),
                    completion_time,
                    turnaround_time,
                    waiting_time: turnaround_time.saturating_sub(process.burst_time()),
                }
            })
            .collect();

        Self {
            average_turnaround_time: average(processes.iter().map(|p| p.turnaround_time)),
            average_waiting_time: average(processes.iter().map(|p| p.waiting_time)),
            processes,
        }
    }
}

fn average(values: impl ExactSizeIterator<Item = Ticks>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<Ticks>() as f64 / count as f64
}
