use super::{ExecutionInterval, Pid, Schedule, Ticks, Workload};
use log::trace;

/// Working state of a single policy run: the clock, remaining burst times
/// and completion flags. Every run builds its own and throws it away when
/// the schedule is returned, so the workload is never mutated.
pub(crate) struct Simulation<'w> {
    workload: &'w Workload,
    now: Ticks,
    remaining: Vec<Ticks>,
    completed: Vec<bool>,
    schedule: Schedule,
}

impl<'w> Simulation<'w> {
    pub fn new(workload: &'w Workload) -> Self {
        let remaining: Vec<Ticks> = workload
            .processes()
            .iter()
            .map(|process| process.burst_time())
            .collect();
        // A process with nothing to run never occupies the processor.
        let completed = remaining.iter().map(|&burst| burst == 0).collect();

        Self {
            workload,
            now: 0,
            remaining,
            completed,
            schedule: Schedule::new(),
        }
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn remaining(&self, pid: Pid) -> Ticks {
        self.remaining[pid]
    }

    pub fn is_completed(&self, pid: Pid) -> bool {
        self.completed[pid]
    }

    pub fn is_finished(&self) -> bool {
        self.completed.iter().all(|&completed| completed)
    }

    pub fn is_ready(&self, pid: Pid) -> bool {
        !self.completed[pid] && self.workload.process(pid).has_arrived(self.now)
    }

    /// Arrived, incomplete processes in pid order.
    pub fn ready(&self) -> impl Iterator<Item = Pid> + '_ {
        (0..self.remaining.len()).filter(move |&pid| self.is_ready(pid))
    }

    /// The ready process with the smallest key. Ties go to the lowest pid,
    /// the first minimum a linear scan finds.
    pub fn select_min_by_key<K, F>(&self, key: F) -> Option<Pid>
    where
        K: Ord,
        F: Fn(Pid) -> K,
    {
        self.ready().min_by_key(|&pid| key(pid))
    }

    /// Jumps the clock to the next arrival among the incomplete processes.
    ///
    /// Called when nothing is ready; the gap leaves no interval behind.
    pub fn idle(&mut self) {
        match self.next_arrival() {
            Some(arrival) => self.advance_to(arrival),
            None => debug_assert!(
                self.is_finished() || self.ready().next().is_some(),
                "idle with no pending arrival"
            ),
        }
    }

    /// The earliest arrival after now among the incomplete processes.
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.workload
            .processes()
            .iter()
            .filter(|process| !self.completed[process.pid()])
            .map(|process| process.arrival_time())
            .filter(|&arrival| arrival > self.now)
            .min()
    }

    /// Moves the clock forward to `time`, leaving an idle gap.
    pub fn advance_to(&mut self, time: Ticks) {
        if time > self.now {
            trace!("idle from {} to {}", self.now, time);
            self.now = time;
        }
    }

    /// Runs `pid` for up to `ticks` starting now and reports whether it
    /// completed. The slice is recorded as an interval of its own.
    pub fn run_for(&mut self, pid: Pid, ticks: Ticks) -> bool {
        let interval = self.execute(pid, ticks);
        self.schedule.push(interval);
        self.completed[pid]
    }

    /// Runs `pid` for up to `ticks`, merging the slice into the previous
    /// interval when that interval is the same process ending right now.
    pub fn run_coalesced(&mut self, pid: Pid, ticks: Ticks) -> bool {
        let interval = self.execute(pid, ticks);
        self.schedule.push_coalesced(interval);
        self.completed[pid]
    }

    pub fn run_to_completion(&mut self, pid: Pid) {
        let remaining = self.remaining[pid];
        self.run_for(pid, remaining);
    }

    pub fn finish(self) -> Schedule {
        debug_assert!(self.is_finished(), "schedule returned before completion");
        self.schedule
    }

    fn execute(&mut self, pid: Pid, ticks: Ticks) -> ExecutionInterval {
        debug_assert!(self.is_ready(pid), "process {pid} is not ready");

        let ticks = ticks.min(self.remaining[pid]);
        let start = self.now;
        self.now += ticks;
        self.remaining[pid] -= ticks;
        if self.remaining[pid] == 0 {
            self.completed[pid] = true;
        }

        trace!(
            "run pid {} for {} ticks at {}, {} remaining",
            pid,
            ticks,
            start,
            self.remaining[pid]
        );

        ExecutionInterval {
            pid,
            name: self.workload.process(pid).name().to_owned(),
            start,
            end: self.now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload(bursts: &[i64], arrivals: &[i64]) -> Workload {
        let labels: Vec<String> = (0..bursts.len()).map(|i| format!("P{}", i + 1)).collect();
        Workload::from_columns(&labels, bursts, arrivals, None).unwrap()
    }

    #[test]
    fn idle_jumps_to_next_arrival() {
        let workload = workload(&[2, 2], &[4, 9]);
        let mut sim = Simulation::new(&workload);

        assert_eq!(sim.ready().count(), 0);
        sim.idle();
        assert_eq!(sim.now(), 4);
        assert_eq!(sim.ready().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn next_arrival_skips_arrived_and_completed_processes() {
        let workload = workload(&[3, 0, 2, 2], &[0, 2, 5, 8]);
        let mut sim = Simulation::new(&workload);

        assert_eq!(sim.next_arrival(), Some(5));
        sim.advance_to(8);
        assert_eq!(sim.next_arrival(), None);
    }

    #[test]
    fn zero_burst_processes_start_completed() {
        let workload = workload(&[0, 3], &[0, 0]);
        let sim = Simulation::new(&workload);

        assert!(sim.is_completed(0));
        assert_eq!(sim.ready().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn ties_go_to_the_lowest_pid() {
        let workload = workload(&[4, 2, 2], &[0, 0, 0]);
        let sim = Simulation::new(&workload);

        assert_eq!(sim.select_min_by_key(|pid| sim.remaining(pid)), Some(1));
    }

    #[test]
    fn working_state_is_private_to_the_run() {
        let workload = workload(&[3], &[0]);
        let mut sim = Simulation::new(&workload);
        sim.run_to_completion(0);

        assert_eq!(sim.remaining(0), 0);
        assert_eq!(workload.process(0).burst_time(), 3);
        assert_eq!(sim.finish().span(), 3);
    }
}
