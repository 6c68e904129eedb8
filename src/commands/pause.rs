//! Pauses the running interval.
//!
//! Only the stored state changes here. The process running `pomo start`
//! notices on its next tick and exits, keeping the progress made so far;
//! the next `pomo start` resumes it.

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

    let id = interval.id;
    match interval.pause(&intervals) {
        Ok(()) => msg_success!(Message::PauseRequested(id)),
        Err(PomodoroError::IntervalNotRunning) => msg_warning!(Message::IntervalNotRunning),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
