use super::{Pid, Ticks};
use std::fmt;

/// One stretch of time during which a single process holds the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionInterval {
    pub pid: Pid,
    pub name: String,
    pub start: Ticks,
    pub end: Ticks,
}

impl ExecutionInterval {
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }

    pub fn contains(&self, time: Ticks) -> bool {
        self.start <= time && time < self.end
    }
}

impl fmt::Display for ExecutionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.start, self.end)
    }
}

/// The ordered, non-overlapping intervals produced by one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    intervals: Vec<ExecutionInterval>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, interval: ExecutionInterval) {
        debug_assert!(interval.end > interval.start, "empty interval {interval}");
        debug_assert!(
            self.intervals
                .last()
                .map_or(true, |last| last.end <= interval.start),
            "interval {interval} overlaps its predecessor"
        );
        self.intervals.push(interval);
    }

    /// Extends the last interval when it belongs to the same process and ends
    /// exactly where `interval` starts, otherwise appends it.
    pub(crate) fn push_coalesced(&mut self, interval: ExecutionInterval) {
        match self.intervals.last_mut() {
            Some(last) if last.pid == interval.pid && last.end == interval.start => {
                last.end = interval.end;
            }
            _ => self.push(interval),
        }
    }

    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The end of the last interval, or zero for an empty schedule.
    pub fn span(&self) -> Ticks {
        self.intervals.last().map_or(0, |last| last.end)
    }

    /// Total busy time, idle gaps excluded.
    pub fn busy_time(&self) -> Ticks {
        self.intervals.iter().map(ExecutionInterval::duration).sum()
    }

    pub fn running_at(&self, time: Ticks) -> Option<&ExecutionInterval> {
        self.intervals.iter().find(|interval| interval.contains(time))
    }

    pub fn completion_time(&self, pid: Pid) -> Option<Ticks> {
        self.intervals
            .iter()
            .rev()
            .find(|interval| interval.pid == pid)
            .map(|interval| interval.end)
    }

    /// The part of the schedule that has happened by `time`.
    pub fn clipped_to(&self, time: Ticks) -> Schedule {
        let intervals = self
            .intervals
            .iter()
            .take_while(|interval| interval.start < time)
            .map(|interval| ExecutionInterval {
                end: interval.end.min(time),
                ..interval.clone()
            })
            .collect();
        Schedule { intervals }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for interval in &self.intervals {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{interval}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(pid: Pid, start: Ticks, end: Ticks) -> ExecutionInterval {
        ExecutionInterval {
            pid,
            name: format!("P{pid}"),
            start,
            end,
        }
    }

    #[test]
    fn coalesces_contiguous_runs_of_one_process() {
        let mut schedule = Schedule::new();
        schedule.push_coalesced(interval(0, 0, 1));
        schedule.push_coalesced(interval(0, 1, 2));
        schedule.push_coalesced(interval(1, 2, 3));

        assert_eq!(schedule.intervals(), &[interval(0, 0, 2), interval(1, 2, 3)]);
    }

    #[test]
    fn does_not_coalesce_across_a_gap() {
        let mut schedule = Schedule::new();
        schedule.push_coalesced(interval(0, 0, 1));
        schedule.push_coalesced(interval(0, 3, 4));

        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn empty_schedule_has_no_span() {
        let schedule = Schedule::new();
        assert_eq!(schedule.span(), 0);
        assert!(schedule.running_at(0).is_none());
        assert_eq!(schedule.to_string(), "");
    }

    #[test]
    fn clips_to_elapsed_time() {
        let mut schedule = Schedule::new();
        schedule.push(interval(0, 0, 5));
        schedule.push(interval(1, 7, 9));

        assert_eq!(schedule.clipped_to(3).intervals(), &[interval(0, 0, 3)]);
        assert_eq!(schedule.clipped_to(7).intervals(), &[interval(0, 0, 5)]);
        assert_eq!(schedule.clipped_to(8).span(), 8);
        assert_eq!(schedule.running_at(8).map(|i| i.pid), Some(1));
        assert!(schedule.running_at(6).is_none());
    }

    #[test]
    fn formats_like_the_chart_labels() {
        let mut schedule = Schedule::new();
        schedule.push(interval(0, 0, 5));
        schedule.push(interval(1, 5, 8));

        assert_eq!(schedule.to_string(), "P0 (0-5), P1 (5-8)");
        assert_eq!(schedule.busy_time(), 8);
        assert_eq!(schedule.completion_time(1), Some(8));
        assert_eq!(schedule.completion_time(2), None);
    }
}
