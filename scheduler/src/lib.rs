//! CPU scheduling simulator.
//!
//! Computes the timeline five classical single-processor policies produce
//! for a fixed workload, plus the statistics and charts built on top of it.

pub mod input;
pub mod scheduler;

pub use scheduler::{Algorithm, ExecutionInterval, Process, Schedule, Scheduler, Workload};
