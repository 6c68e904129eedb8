//! The interval entity tracked by the engine.
//!
//! An [`Interval`] is one timed work or break session. It is created with
//! `NotStarted` state and zero progress; the timer then advances
//! `actual_duration` one second at a time until the interval is done,
//! cancelled or paused.

use super::error::{PomodoroError, Result};
use chrono::{DateTime, Duration, Local};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Kind of interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Pomodoro, Category::ShortBreak, Category::LongBreak];

    /// Name used in storage and in category filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pomodoro => "Pomodoro",
            Category::ShortBreak => "ShortBreak",
            Category::LongBreak => "LongBreak",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Category::ShortBreak | Category::LongBreak)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = PomodoroError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Pomodoro" => Ok(Category::Pomodoro),
            "ShortBreak" => Ok(Category::ShortBreak),
            "LongBreak" => Ok(Category::LongBreak),
            other => Err(PomodoroError::InvalidState(format!("unknown category {other}"))),
        }
    }
}

/// Lifecycle state of an interval.
///
/// The integer codes are the values persisted by the SQLite backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    NotStarted,
    Running,
    Paused,
    Done,
    Cancelled,
}

impl State {
    pub fn code(&self) -> i64 {
        match self {
            State::NotStarted => 0,
            State::Running => 1,
            State::Paused => 2,
            State::Done => 3,
            State::Cancelled => 4,
        }
    }

    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(State::NotStarted),
            1 => Ok(State::Running),
            2 => Ok(State::Paused),
            3 => Ok(State::Done),
            4 => Ok(State::Cancelled),
            other => Err(PomodoroError::InvalidState(other.to_string())),
        }
    }

    /// `Done` and `Cancelled` never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Done | State::Cancelled)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            State::NotStarted => "Not started",
            State::Running => "Running",
            State::Paused => "Paused",
            State::Done => "Done",
            State::Cancelled => "Cancelled",
        };
        write!(f, "{}", name)
    }
}

/// A single work or break session.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    /// Assigned by the repository on creation; zero until then.
    pub id: i64,
    pub start_time: DateTime<Local>,
    pub planned_duration: Duration,
    pub actual_duration: Duration,
    pub category: Category,
    pub state: State,
}

impl Interval {
    /// Builds an unsaved interval starting now.
    pub fn new(category: Category, planned_duration: Duration) -> Self {
        Self {
            id: 0,
            start_time: Local::now(),
            planned_duration,
            actual_duration: Duration::zero(),
            category,
            state: State::NotStarted,
        }
    }

    /// Time left before the interval expires.
    pub fn remaining(&self) -> Duration {
        let remaining = self.planned_duration - self.actual_duration;
        if remaining < Duration::zero() {
            Duration::zero()
        } else {
            remaining
        }
    }
}
