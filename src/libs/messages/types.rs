/// Every user-facing message, rendered by the `Display` impl in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === INTERVAL MESSAGES ===
    IntervalStarting(String, String), // category, planned
    IntervalResuming(i64, String),    // id, category
    IntervalProgress(String, String), // category, remaining
    IntervalDone(String),             // category
    IntervalPaused(i64),              // id
    IntervalCancelled(i64),           // id
    IntervalAlreadyRunning(i64),      // id
    IntervalNotRunning,
    IntervalFinished(i64, String),    // id, state
    PauseRequested(i64),              // id
    CancelRequested(i64),             // id
    NextCategory(String),             // category
    NoIntervalsYet,

    // === SUMMARY MESSAGES ===
    SummaryHeader(String), // date
    InvalidDate(String),   // input

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigPath(String), // path

    // === SIGNAL MESSAGES ===
    ReceivedCtrlC,
    CtrlCListenFailed(String), // error message

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
