//! Cancels the current interval from outside the process running it.

use crate::libs::config::Config;
use crate::libs::error::PomodoroError;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let intervals = Config::read()?.interval_config()?;

    let interval = match intervals.repo().last() {
        Ok(interval) => interval,
        Err(PomodoroError::NoIntervals) => {
            msg_warning!(Message::NoIntervalsYet);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let (id, state) = (interval.id, interval.state);
    match interval.cancel(&intervals) {
        Ok(()) => msg_success!(Message::CancelRequested(id)),
        Err(PomodoroError::IntervalCompleted(_)) => msg_warning!(Message::IntervalFinished(id, state.to_string())),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
