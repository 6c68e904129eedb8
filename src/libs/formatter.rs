//! Duration formatting for console output.
//!
//! - [`format_duration`] gives "HH:MM" for daily totals.
//! - [`format_clock`] gives "MM:SS" for a running interval and switches to
//!   "H:MM:SS" past the hour.
//!
//! Negative durations are shown as zero.

use crate::libs::interval::Interval;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// An interval prepared for table display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedInterval {
    pub id: i64,
    pub category: String,
    pub start: String,
    pub planned: String,
    pub actual: String,
    pub state: String,
}

impl From<&Interval> for FormattedInterval {
    fn from(interval: &Interval) -> Self {
        FormattedInterval {
            id: interval.id,
            category: interval.category.to_string(),
            start: interval.start_time.format("%Y-%m-%d %H:%M").to_string(),
            planned: format_clock(&interval.planned_duration),
            actual: format_clock(&interval.actual_duration),
            state: interval.state.to_string(),
        }
    }
}

pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

pub fn format_clock(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    let (hours, mins, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}
