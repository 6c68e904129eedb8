//! Text for every [`Message`].
//!
//! All user-facing wording lives here so commands only pick a variant and
//! its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === INTERVAL MESSAGES ===
            Message::IntervalStarting(category, planned) => format!("Starting {} ({})", category, planned),
            Message::IntervalResuming(id, category) => format!("Resuming {} #{}", category, id),
            Message::IntervalProgress(category, remaining) => format!("{}: {} left", category, remaining),
            Message::IntervalDone(category) => format!("{} finished", category),
            Message::IntervalPaused(id) => format!("Interval #{} paused", id),
            Message::IntervalCancelled(id) => format!("Interval #{} cancelled", id),
            Message::IntervalAlreadyRunning(id) => format!("Interval #{} is already running elsewhere", id),
            Message::IntervalNotRunning => "No interval is running".to_string(),
            Message::IntervalFinished(id, state) => format!("Interval #{} is {}", id, state.to_lowercase()),
            Message::PauseRequested(id) => format!("Pause requested for interval #{}", id),
            Message::CancelRequested(id) => format!("Interval #{} cancelled", id),
            Message::NextCategory(category) => format!("Next up: {}", category),
            Message::NoIntervalsYet => "No intervals recorded yet".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(date) => format!("Summary for {}", date),
            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", input),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigPath(path) => format!("Configuration file: {}", path),

            // === SIGNAL MESSAGES ===
            Message::ReceivedCtrlC => "Received Ctrl+C, cancelling interval".to_string(),
            Message::CtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}
