use super::{Pid, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pid: Pid,
    name: String,
    burst_time: Ticks,
    arrival_time: Ticks,
    priority: i64,
}

impl Process {
    const DEFAULT_PRIORITY: i64 = 0;

    pub fn new(pid: Pid, burst_time: Ticks, arrival_time: Ticks) -> Self {
        Process::named(pid, &format!("P{}", pid + 1), burst_time, arrival_time)
    }

    pub fn named(pid: Pid, name: &str, burst_time: Ticks, arrival_time: Ticks) -> Self {
        Process::with_priority(
            pid,
            name,
            burst_time,
            arrival_time,
            Process::DEFAULT_PRIORITY,
        )
    }

    pub fn with_priority(
        pid: Pid,
        name: &str,
        burst_time: Ticks,
        arrival_time: Ticks,
        priority: i64,
    ) -> Self {
        Self {
            pid,
            name: name.to_owned(),
            burst_time,
            arrival_time,
            priority,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    /// Lower values are more urgent.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }
}
