//! Entry points used by a driver (the CLI) to work with intervals.
//!
//! [`IntervalConfig`] bundles the configured durations with the repository.
//! It is built once at startup and passed to everything that needs it.
//!
//! A typical session:
//!
//! ```rust,no_run
//! use pomo::db::memory::MemoryIntervals;
//! use pomo::libs::pomodoro::{get_interval, IntervalConfig};
//! use pomo::libs::timer::handlers;
//! use chrono::Duration;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn session() -> pomo::libs::error::Result<()> {
//! let config = IntervalConfig::new(Arc::new(MemoryIntervals::new()), Duration::zero(), Duration::zero(), Duration::zero());
//! let interval = get_interval(&config)?;
//! let mut callbacks = handlers(|_| {}, |i| println!("{}", i.actual_duration), |_| println!("done"));
//! interval.start(&config, &CancellationToken::new(), &mut callbacks).await?;
//! # Ok(())
//! # }
//! ```

use crate::db::repository::Repository;
use crate::libs::error::{PomodoroError, Result};
use crate::libs::interval::{Category, Interval, State};
use crate::libs::scheduler::next_category;
use crate::libs::timer::{self, Callbacks};
use chrono::Duration;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub const DEFAULT_POMODORO_MINUTES: i64 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: i64 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: i64 = 15;

/// Interval durations plus the repository they are recorded in.
#[derive(Clone)]
pub struct IntervalConfig {
    repo: Arc<dyn Repository>,
    pub pomodoro_duration: Duration,
    pub short_break_duration: Duration,
    pub long_break_duration: Duration,
}

fn positive_or(value: Duration, default: Duration) -> Duration {
    if value > Duration::zero() {
        value
    } else {
        default
    }
}

impl IntervalConfig {
    /// Zero or negative durations fall back to 25, 5 and 15 minutes.
    pub fn new(repo: Arc<dyn Repository>, pomodoro: Duration, short_break: Duration, long_break: Duration) -> Self {
        Self {
            repo,
            pomodoro_duration: positive_or(pomodoro, Duration::minutes(DEFAULT_POMODORO_MINUTES)),
            short_break_duration: positive_or(short_break, Duration::minutes(DEFAULT_SHORT_BREAK_MINUTES)),
            long_break_duration: positive_or(long_break, Duration::minutes(DEFAULT_LONG_BREAK_MINUTES)),
        }
    }

    pub fn repo(&self) -> &dyn Repository {
        self.repo.as_ref()
    }

    pub fn duration_for(&self, category: Category) -> Duration {
        match category {
            Category::Pomodoro => self.pomodoro_duration,
            Category::ShortBreak => self.short_break_duration,
            Category::LongBreak => self.long_break_duration,
        }
    }
}

/// Creates and stores the next interval chosen by the scheduler.
pub fn new_interval(config: &IntervalConfig) -> Result<Interval> {
    let category = next_category(config.repo())?;
    let mut interval = Interval::new(category, config.duration_for(category));
    interval.id = config.repo().create(&interval)?;
    info!(id = interval.id, %category, "interval created");
    Ok(interval)
}

/// Returns the interval to work on: the last one if it can still run,
/// otherwise a newly created one.
pub fn get_interval(config: &IntervalConfig) -> Result<Interval> {
    match config.repo().last() {
        Ok(interval) if !interval.state.is_terminal() => Ok(interval),
        Ok(_) | Err(PomodoroError::NoIntervals) => new_interval(config),
        Err(e) => Err(e),
    }
}

/// Runs the next interval: resumes an unfinished one or schedules a new one.
pub async fn start_next<C: Callbacks + ?Sized>(
    config: &IntervalConfig,
    cancel: &CancellationToken,
    callbacks: &mut C,
) -> Result<()> {
    get_interval(config)?.start(config, cancel, callbacks).await
}

impl Interval {
    /// Marks the interval running and hands it to the timer.
    ///
    /// An interval that is already running belongs to another driver and is
    /// left alone. Finished intervals cannot be restarted.
    pub async fn start<C: Callbacks + ?Sized>(
        mut self,
        config: &IntervalConfig,
        cancel: &CancellationToken,
        callbacks: &mut C,
    ) -> Result<()> {
        match self.state {
            State::Running => Ok(()),
            State::NotStarted | State::Paused => {
                self.state = State::Running;
                config.repo().update(&self)?;
                timer::run(self.id, config, cancel, callbacks).await
            }
            State::Done | State::Cancelled => Err(PomodoroError::IntervalCompleted("cannot start".to_string())),
        }
    }

    /// Asks the running timer to stop by persisting a `Paused` state.
    pub fn pause(mut self, config: &IntervalConfig) -> Result<()> {
        if self.state != State::Running {
            return Err(PomodoroError::IntervalNotRunning);
        }
        self.state = State::Paused;
        config.repo().update(&self)?;
        info!(id = self.id, "pause requested");
        Ok(())
    }

    /// Cancels an unfinished interval through storage.
    ///
    /// A timer running elsewhere stops on its next tick without calling
    /// `on_end`. Inside the process that owns the timer, prefer the
    /// cancellation token.
    pub fn cancel(mut self, config: &IntervalConfig) -> Result<()> {
        if self.state.is_terminal() {
            return Err(PomodoroError::IntervalCompleted("cannot cancel".to_string()));
        }
        self.state = State::Cancelled;
        config.repo().update(&self)?;
        info!(id = self.id, "interval cancelled");
        Ok(())
    }
}
