//! Error types shared by the interval engine and its storage backends.
//!
//! Every repository, scheduler and timer operation returns [`PomodoroError`].
//! Backend failures are wrapped without losing the source error so callers
//! can still inspect the kind with `matches!`.

use thiserror::Error;

/// Errors produced by the pomodoro interval engine.
#[derive(Error, Debug)]
pub enum PomodoroError {
    /// The identifier is zero or does not refer to a stored interval.
    #[error("invalid ID: {0}")]
    InvalidId(i64),

    /// A history query ran against an empty store.
    #[error("no intervals")]
    NoIntervals,

    /// The operation requires a running interval.
    #[error("interval not running")]
    IntervalNotRunning,

    /// The interval is done or cancelled and cannot be started again.
    #[error("interval is completed or cancelled: {0}")]
    IntervalCompleted(String),

    /// A stored state or category value is not recognised.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The SQLite backend failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, PomodoroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(PomodoroError::InvalidId(7).to_string(), "invalid ID: 7");
        assert_eq!(PomodoroError::NoIntervals.to_string(), "no intervals");
        assert_eq!(
            PomodoroError::IntervalCompleted("cannot start".to_string()).to_string(),
            "interval is completed or cancelled: cannot start"
        );
    }

    #[test]
    fn test_backend_error_keeps_source() {
        let err: PomodoroError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, PomodoroError::Database(rusqlite::Error::QueryReturnedNoRows)));
    }
}
