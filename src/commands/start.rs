//! Runs the current interval in the foreground.
//!
//! Resumes an unfinished interval or starts the one the scheduler picks.
//! Ctrl+C cancels the interval; `pomo pause` from another terminal pauses it
//! within a second.

use super::init::SettingsArgs;
use crate::libs::config::Config;
use crate::libs::formatter::format_clock;
use crate::libs::interval::{Interval, State};
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::libs::pomodoro::get_interval;
use crate::libs::scheduler::next_category;
use crate::libs::timer::handlers;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Args)]
pub struct StartArgs {
    #[command(flatten)]
    settings: SettingsArgs,
}

pub async fn cmd(args: StartArgs) -> Result<()> {
    let mut config = Config::read()?;
    args.settings.apply(&mut config);
    let intervals = config.interval_config()?;

    let interval = get_interval(&intervals)?;
    let id = interval.id;
    match interval.state {
        State::Running => {
            msg_warning!(Message::IntervalAlreadyRunning(id));
            return Ok(());
        }
        State::Paused => msg_info!(Message::IntervalResuming(id, interval.category.to_string())),
        _ => {}
    }

    let cancel = CancellationToken::new();
    let signal_handle = tokio::spawn(listen_for_ctrl_c(cancel.clone()));

    let mut callbacks = handlers(
        |i: &Interval| msg_info!(Message::IntervalStarting(i.category.to_string(), format_clock(&i.planned_duration))),
        show_progress,
        |i: &Interval| {
            println!();
            msg_success!(Message::IntervalDone(i.category.to_string()));
        },
    );
    let result = interval.start(&intervals, &cancel, &mut callbacks).await;
    signal_handle.abort();
    result?;

    let finished = intervals.repo().by_id(id)?;
    match finished.state {
        State::Paused => {
            println!();
            msg_info!(Message::IntervalPaused(id));
        }
        State::Cancelled => {
            println!();
            msg_info!(Message::IntervalCancelled(id));
        }
        State::Done => msg_info!(Message::NextCategory(next_category(intervals.repo())?.to_string())),
        _ => {}
    }

    Ok(())
}

async fn listen_for_ctrl_c(cancel: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            msg_info!(Message::ReceivedCtrlC);
            cancel.cancel();
        }
        Err(e) => msg_error!(Message::CtrlCListenFailed(e.to_string())),
    }
}

/// Rewrites a single status line in the terminal; logs a line per tick in
/// debug mode.
fn show_progress(interval: &Interval) {
    let text = Message::IntervalProgress(interval.category.to_string(), format_clock(&interval.remaining()));
    if is_debug_mode() {
        tracing::info!("{}", text);
    } else {
        print!("\r⏱  {}   ", text);
        // Debug logging is off on this branch; a failed flush only delays
        // the line until the next tick rewrites it.
        let _ = io::stdout().flush();
    }
}
