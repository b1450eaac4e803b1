use super::{simulation::Simulation, Pid, Schedule, Scheduler, Workload};
use log::debug;

/// Runs processes to completion in arrival order, fixed before the run
/// starts. Equal arrivals keep their pid order.
pub fn fcfs(workload: &Workload) -> Schedule {
    let mut order: Vec<Pid> = (0..workload.len()).collect();
    order.sort_by_key(|&pid| workload.process(pid).arrival_time());

    let mut sim = Simulation::new(workload);
    for pid in order {
        if sim.is_completed(pid) {
            continue;
        }
        sim.advance_to(workload.process(pid).arrival_time());
        sim.run_to_completion(pid);
    }

    let schedule = sim.finish();
    debug!("{}: {}", FirstComeFirstServed::NAME, schedule);
    schedule
}

pub struct FirstComeFirstServed;

impl Scheduler for FirstComeFirstServed {
    const NAME: &'static str = "First Come First Served";

    fn schedule(&self, workload: &Workload) -> Schedule {
        fcfs(workload)
    }
}
