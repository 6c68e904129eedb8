use super::formatter::{format_duration, FormattedInterval};
use super::summary::DailySummary;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn intervals(intervals: &[FormattedInterval]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "CATEGORY", "STARTED", "PLANNED", "ACTUAL", "STATE"]);
        for interval in intervals {
            table.add_row(row![
                interval.id,
                interval.category,
                interval.start,
                interval.planned,
                interval.actual,
                interval.state
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &DailySummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "POMODORO", "BREAKS", "TOTAL"]);
        table.add_row(row![
            summary.date.format("%Y-%m-%d"),
            format_duration(&summary.pomodoro),
            format_duration(&summary.breaks),
            format_duration(&summary.total())
        ]);
        table.printstd();

        Ok(())
    }
}
