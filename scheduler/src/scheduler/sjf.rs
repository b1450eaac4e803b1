use super::{simulation::Simulation, Schedule, Scheduler, Workload};
use log::debug;

/// Non-preemptive shortest job first. At every decision point the ready
/// process with the smallest burst runs to completion; equal bursts go to
/// the lowest pid.
pub fn sjf(workload: &Workload) -> Schedule {
    let mut sim = Simulation::new(workload);

    while !sim.is_finished() {
        match sim.select_min_by_key(|pid| sim.remaining(pid)) {
            Some(pid) => sim.run_to_completion(pid),
            None => sim.idle(),
        }
    }

    let schedule = sim.finish();
    debug!("{}: {}", ShortestJobFirst::NAME, schedule);
    schedule
}

pub struct ShortestJobFirst;

impl Scheduler for ShortestJobFirst {
    const NAME: &'static str = "Shortest Job First";

    fn schedule(&self, workload: &Workload) -> Schedule {
        sjf(workload)
    }
}
