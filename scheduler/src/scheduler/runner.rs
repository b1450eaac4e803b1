use super::{
    display::{DisplayTerminal, ReplayFrame},
    Algorithm, Schedule, Statistics, Ticks, Workload, DEFAULT_TICK_RATE,
};
use log::info;
use std::{io, num::NonZeroU64, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEvent {
    Quit,
    Pause,
    Resume,
    Step,
    NextAlgorithm,
    None,
}

/// Playback position within one computed schedule.
struct Replay {
    algorithm: Algorithm,
    schedule: Schedule,
    statistics: Statistics,
    now: Ticks,
    paused: bool,
}

impl Replay {
    fn new(workload: &Workload, algorithm: Algorithm, quantum: NonZeroU64) -> Self {
        let schedule = algorithm.schedule(workload, quantum);
        let statistics = Statistics::compute(workload, &schedule);
        info!(
            "{}: average waiting time {:.2}, average turnaround time {:.2}",
            algorithm, statistics.average_waiting_time, statistics.average_turnaround_time
        );

        Self {
            algorithm,
            schedule,
            statistics,
            now: 0,
            paused: false,
        }
    }

    fn advance(&mut self) {
        if self.now < self.schedule.span() {
            self.now += 1;
        }
    }

    fn tick(&mut self) {
        if !self.paused {
            self.advance();
        }
    }

    fn frame(&self) -> ReplayFrame<'_> {
        ReplayFrame {
            algorithm: self.algorithm,
            schedule: &self.schedule,
            statistics: &self.statistics,
            now: self.now,
            paused: self.paused,
        }
    }
}

pub struct ScheduleRunner {
    terminal: DisplayTerminal,
    workload: Workload,
    quantum: NonZeroU64,
    replay: Replay,
}

impl ScheduleRunner {
    pub fn new(workload: Workload, algorithm: Algorithm, quantum: NonZeroU64) -> io::Result<Self> {
        ScheduleRunner::with_tick_rate(workload, algorithm, quantum, DEFAULT_TICK_RATE)
    }

    pub fn with_tick_rate(
        workload: Workload,
        algorithm: Algorithm,
        quantum: NonZeroU64,
        tick_rate: Duration,
    ) -> io::Result<Self> {
        let terminal = DisplayTerminal::new(tick_rate)?;
        let replay = Replay::new(&workload, algorithm, quantum);

        Ok(Self {
            terminal,
            workload,
            quantum,
            replay,
        })
    }

    // Returns false if the program should quit
    pub fn run(&mut self) -> io::Result<bool> {
        self.terminal.draw(&self.replay.frame())?;

        match self.terminal.get_input() {
            RunnerEvent::Quit => return Ok(false),
            // A fresh replay starts from t=0 on the next frame
            RunnerEvent::NextAlgorithm => {
                let algorithm = self.replay.algorithm.next();
                self.replay = Replay::new(&self.workload, algorithm, self.quantum);
            }
            event => {
                self.replay.handle(event);
                self.replay.tick();
            }
        }
        Ok(true)
    }
}

impl Replay {
    fn handle(&mut self, event: RunnerEvent) {
        match event {
            RunnerEvent::Pause if !self.paused => self.paused = true,
            RunnerEvent::Resume if self.paused => self.paused = false,
            RunnerEvent::Step if self.paused => self.advance(),
            _ => {}
        }
    }
}
