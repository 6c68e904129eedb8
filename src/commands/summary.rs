//! Daily totals of work and break time.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::summary::daily_summary;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[arg(long, short, default_value = "today", help = "Date to summarize (YYYY-MM-DD or 'today')")]
    date: String,
}

pub fn cmd(args: SummaryArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let intervals = Config::read()?.interval_config()?;

    let summary = daily_summary(intervals.repo(), date)?;

    msg_print!(Message::SummaryHeader(date.format("%B %-d, %Y").to_string()), true);
    View::summary(&summary)?;

    Ok(())
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}
