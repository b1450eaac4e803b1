//! Turns the comma separated fields of the input form into a [`Workload`].

use crate::scheduler::{self, Workload, WorkloadError};
use log::debug;
use std::num::NonZeroU64;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{column}: `{token}` is not a whole number")]
    InvalidNumber { column: &'static str, token: String },
    #[error(transparent)]
    Workload(#[from] WorkloadError),
}

pub const DELIMITER: char = ',';

pub fn parse_labels(text: &str) -> Vec<String> {
    tokens(text).map(str::to_owned).collect()
}

pub fn parse_numbers(column: &'static str, text: &str) -> Result<Vec<i64>, InputError> {
    tokens(text)
        .map(|token| {
            token.parse().map_err(|_| InputError::InvalidNumber {
                column,
                token: token.to_owned(),
            })
        })
        .collect()
}

pub fn parse_quantum(text: &str) -> Result<NonZeroU64, InputError> {
    let text = text.trim();
    let value: i64 = text.parse().map_err(|_| InputError::InvalidNumber {
        column: "time quantum",
        token: text.to_owned(),
    })?;
    Ok(scheduler::quantum(value)?)
}

/// Builds a workload from the raw form fields. An empty priority field
/// gives every process the default priority.
pub fn collect_workload(
    labels: &str,
    burst_times: &str,
    arrival_times: &str,
    priorities: &str,
) -> Result<Workload, InputError> {
    let labels = parse_labels(labels);
    let burst_times = parse_numbers("burst times", burst_times)?;
    let arrival_times = parse_numbers("arrival times", arrival_times)?;
    let priorities = parse_numbers("priorities", priorities)?;
    let priorities = (!priorities.is_empty()).then_some(priorities.as_slice());

    let workload = Workload::from_columns(&labels, &burst_times, &arrival_times, priorities)?;
    debug!("collected a workload of {} processes", workload.len());
    Ok(workload)
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
