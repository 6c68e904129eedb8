//! Drives a single interval from start to its final state.
//!
//! The timer waits on three event sources at once:
//!
//! - a one-second ticker that adds a second of progress and persists it;
//! - a one-shot expiration armed for the time that was left when the run began;
//! - the caller's cancellation token.
//!
//! ```text
//!                ┌── tick ──┐
//!                ▼          │
//! NotStarted ─▶ Running ────┴─▶ Done       (expiration, on_end)
//!                  │      └───▶ Cancelled  (token, no on_end)
//!                  └──────────▶ Paused     (observed in storage, no on_end)
//! ```
//!
//! Pause is not signalled in process. Every tick re-reads the interval from
//! the repository, so anything that can write a `Paused` state through the
//! repository can stop the timer, at the cost of up to one second of latency.
//!
//! Progress is reported through [`Callbacks`]. Closures can be wired in with
//! [`handlers`], and an `mpsc` sender of [`Progress`] messages works as a
//! callback sink directly.

use crate::libs::error::Result;
use crate::libs::interval::{Interval, State};
use crate::libs::pomodoro::IntervalConfig;
use chrono::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Tick period and progress step.
pub const TICK: std::time::Duration = std::time::Duration::from_secs(1);

/// Expiration used when the remaining time does not fit the clock.
const FAR_FUTURE: std::time::Duration = std::time::Duration::from_secs(86400 * 365 * 30);

/// Receives progress from a running timer.
///
/// All three are called from the timer's task, synchronously, with the
/// interval as it was just persisted.
pub trait Callbacks: Send {
    /// Once, before the first tick.
    fn on_start(&mut self, interval: &Interval);
    /// After every persisted tick.
    fn on_tick(&mut self, interval: &Interval);
    /// Only when the interval runs to completion; never on pause or cancel.
    fn on_end(&mut self, interval: &Interval);
}

/// Three closures acting as [`Callbacks`].
pub struct Handlers<S, T, E> {
    on_start: S,
    on_tick: T,
    on_end: E,
}

pub fn handlers<S, T, E>(on_start: S, on_tick: T, on_end: E) -> Handlers<S, T, E>
where
    S: FnMut(&Interval) + Send,
    T: FnMut(&Interval) + Send,
    E: FnMut(&Interval) + Send,
{
    Handlers { on_start, on_tick, on_end }
}

impl<S, T, E> Callbacks for Handlers<S, T, E>
where
    S: FnMut(&Interval) + Send,
    T: FnMut(&Interval) + Send,
    E: FnMut(&Interval) + Send,
{
    fn on_start(&mut self, interval: &Interval) {
        (self.on_start)(interval)
    }

    fn on_tick(&mut self, interval: &Interval) {
        (self.on_tick)(interval)
    }

    fn on_end(&mut self, interval: &Interval) {
        (self.on_end)(interval)
    }
}

/// Progress message for drivers that prefer a channel to callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    Started(Interval),
    Ticked(Interval),
    Ended(Interval),
}

impl Callbacks for UnboundedSender<Progress> {
    fn on_start(&mut self, interval: &Interval) {
        if self.send(Progress::Started(interval.clone())).is_err() {
            debug!(id = interval.id, "progress receiver dropped");
        }
    }

    fn on_tick(&mut self, interval: &Interval) {
        if self.send(Progress::Ticked(interval.clone())).is_err() {
            debug!(id = interval.id, "progress receiver dropped");
        }
    }

    fn on_end(&mut self, interval: &Interval) {
        if self.send(Progress::Ended(interval.clone())).is_err() {
            debug!(id = interval.id, "progress receiver dropped");
        }
    }
}

/// Runs the interval `id` until it expires, is cancelled or is seen paused.
///
/// Returns `Ok(())` in all three cases. Any repository error stops the run
/// and is returned as is; nothing is retried.
pub async fn run<C: Callbacks + ?Sized>(
    id: i64,
    config: &IntervalConfig,
    cancel: &CancellationToken,
    callbacks: &mut C,
) -> Result<()> {
    let repo = config.repo();
    let interval = repo.by_id(id)?;

    let remaining = interval.remaining().to_std().unwrap_or_default();
    let started = Instant::now();
    let deadline = started.checked_add(remaining).unwrap_or_else(|| started + FAR_FUTURE);
    let expire = time::sleep_until(deadline);
    tokio::pin!(expire);

    // Same origin for both, so the last tick is seen before expiration.
    let mut ticker = time::interval_at(started + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(id, category = %interval.category, remaining_secs = remaining.as_secs(), "interval started");
    callbacks.on_start(&interval);

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                let mut interval = repo.by_id(id)?;
                interval.state = State::Cancelled;
                repo.update(&interval)?;
                info!(id, actual_secs = interval.actual_duration.num_seconds(), "interval cancelled");
                return Ok(());
            }

            _ = ticker.tick() => {
                let mut interval = repo.by_id(id)?;
                if interval.state == State::Paused {
                    info!(id, actual_secs = interval.actual_duration.num_seconds(), "interval paused");
                    return Ok(());
                }
                if interval.state.is_terminal() {
                    info!(id, state = %interval.state, "interval finished elsewhere");
                    return Ok(());
                }
                if interval.actual_duration >= interval.planned_duration {
                    continue;
                }
                interval.actual_duration = interval.actual_duration + Duration::seconds(1);
                repo.update(&interval)?;
                debug!(id, actual_secs = interval.actual_duration.num_seconds(), "tick");
                callbacks.on_tick(&interval);
            }

            _ = &mut expire => {
                let mut interval = repo.by_id(id)?;
                interval.state = State::Done;
                // on_end only ever sees a persisted Done; a failed update
                // returns the error without calling it.
                repo.update(&interval)?;
                info!(id, category = %interval.category, "interval done");
                callbacks.on_end(&interval);
                return Ok(());
            }
        }
    }
}
