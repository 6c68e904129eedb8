use crate::libs::config::Config;
use crate::libs::error::PomodoroError;
use crate::libs::formatter::FormattedInterval;
use crate::libs::messages::Message;
use crate::libs::scheduler::next_category;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

/// Shows the most recent interval and what comes after it.
pub fn cmd() -> Result<()> {
    let intervals = Config::read()?.interval_config()?;

    match intervals.repo().last() {
        Ok(interval) => {
            View::intervals(&[FormattedInterval::from(&interval)])?;
            if interval.state.is_terminal() {
                msg_print!(Message::NextCategory(next_category(intervals.repo())?.to_string()));
            }
        }
        Err(PomodoroError::NoIntervals) => msg_info!(Message::NoIntervalsYet),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
