//! Daily totals of focused and break time.

use crate::db::repository::Repository;
use crate::libs::error::Result;
use crate::libs::interval::Category;
use chrono::{Duration, NaiveDate};

/// Filter matching both break categories.
pub const BREAK_FILTER: &str = "%Break";

#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub pomodoro: Duration,
    pub breaks: Duration,
}

impl DailySummary {
    pub fn total(&self) -> Duration {
        self.pomodoro + self.breaks
    }
}

/// Sums the time actually spent on `day`, split into work and breaks.
pub fn daily_summary(repo: &dyn Repository, day: NaiveDate) -> Result<DailySummary> {
    Ok(DailySummary {
        date: day,
        pomodoro: repo.category_summary(day, Category::Pomodoro.as_str())?,
        breaks: repo.category_summary(day, BREAK_FILTER)?,
    })
}
