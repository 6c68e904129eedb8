//! Volatile interval store.
//!
//! Keeps the history in a vector guarded by a reader/writer lock: reads run
//! concurrently, writes are exclusive. Ids are positions in the vector plus
//! one, so they are sequential and never reused. As in SQLite, `update` only
//! writes progress and state. Nothing survives the process.

use crate::db::repository::Repository;
use crate::libs::error::{PomodoroError, Result};
use crate::libs::interval::{Category, Interval};
use chrono::{Duration, NaiveDate};
use parking_lot::RwLock;

#[derive(Default)]
pub struct MemoryIntervals {
    intervals: RwLock<Vec<Interval>>,
}

impl MemoryIntervals {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(id: i64, len: usize) -> Result<usize> {
        if id <= 0 || id as usize > len {
            return Err(PomodoroError::InvalidId(id));
        }
        Ok(id as usize - 1)
    }
}

impl Repository for MemoryIntervals {
    fn create(&self, interval: &Interval) -> Result<i64> {
        let mut intervals = self.intervals.write();
        let id = intervals.len() as i64 + 1;
        let mut record = interval.clone();
        record.id = id;
        intervals.push(record);
        Ok(id)
    }

    fn update(&self, interval: &Interval) -> Result<()> {
        let mut intervals = self.intervals.write();
        let idx = Self::index(interval.id, intervals.len())?;
        let stored = &mut intervals[idx];
        stored.actual_duration = interval.actual_duration;
        stored.state = interval.state;
        Ok(())
    }

    fn by_id(&self, id: i64) -> Result<Interval> {
        let intervals = self.intervals.read();
        let idx = Self::index(id, intervals.len())?;
        Ok(intervals[idx].clone())
    }

    fn last(&self) -> Result<Interval> {
        self.intervals.read().last().cloned().ok_or(PomodoroError::NoIntervals)
    }

    fn breaks(&self, n: usize) -> Result<Vec<Interval>> {
        let intervals = self.intervals.read();
        Ok(intervals
            .iter()
            .rev()
            .filter(|i| i.category != Category::Pomodoro)
            .take(n)
            .cloned()
            .collect())
    }

    fn category_summary(&self, day: NaiveDate, filter: &str) -> Result<Duration> {
        let filter = filter.trim_matches('%');
        let intervals = self.intervals.read();
        Ok(intervals
            .iter()
            .filter(|i| i.start_time.date_naive() == day && i.category.as_str().contains(filter))
            .fold(Duration::zero(), |total, i| total + i.actual_duration))
    }
}
