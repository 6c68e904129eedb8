//! Picks the category of the next interval from history.
//!
//! Rules, in order:
//!
//! 1. Empty history starts with a pomodoro.
//! 2. Every break is followed by a pomodoro.
//! 3. After a pomodoro comes a short break, unless the three most recent
//!    breaks were all short, in which case it is time for a long break.
//!
//! The decision depends only on what the repository returns, so the same
//! history always yields the same category.

use crate::db::repository::Repository;
use crate::libs::error::{PomodoroError, Result};
use crate::libs::interval::Category;

/// Short breaks needed before a long break is due.
pub const BREAKS_BEFORE_LONG_BREAK: usize = 3;

pub fn next_category(repo: &dyn Repository) -> Result<Category> {
    let last = match repo.last() {
        Ok(interval) => interval,
        Err(PomodoroError::NoIntervals) => return Ok(Category::Pomodoro),
        Err(e) => return Err(e),
    };

    if last.category.is_break() {
        return Ok(Category::Pomodoro);
    }

    let last_breaks = repo.breaks(BREAKS_BEFORE_LONG_BREAK)?;
    if last_breaks.len() < BREAKS_BEFORE_LONG_BREAK {
        return Ok(Category::ShortBreak);
    }

    if last_breaks.iter().any(|i| i.category == Category::LongBreak) {
        return Ok(Category::ShortBreak);
    }

    Ok(Category::LongBreak)
}
