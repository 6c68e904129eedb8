//! Storage contract for interval history.
//!
//! The scheduler, timer and orchestrator only ever talk to a
//! [`Repository`]. Two implementations ship with the crate:
//! [`Intervals`](crate::db::intervals::Intervals) on SQLite and
//! [`MemoryIntervals`](crate::db::memory::MemoryIntervals) kept in process.
//!
//! Every method may be called from several tasks at once. Implementations
//! serialize writes internally and guarantee that a caller observes its own
//! writes on the next read. Concurrent `update`s of one record race: the last
//! one wins.

use crate::libs::error::Result;
use crate::libs::interval::Interval;
use chrono::{Duration, NaiveDate};

pub trait Repository: Send + Sync {
    /// Stores a new interval and returns its freshly assigned id.
    fn create(&self, interval: &Interval) -> Result<i64>;

    /// Writes `actual_duration` and `state` of the stored record with the
    /// same id. Start time, plan and category are fixed at creation.
    ///
    /// Fails with `InvalidId` when the id is zero or unknown.
    fn update(&self, interval: &Interval) -> Result<()>;

    /// Fails with `InvalidId` when the id is zero or unknown.
    fn by_id(&self, id: i64) -> Result<Interval>;

    /// Most recently created interval, or `NoIntervals`.
    fn last(&self) -> Result<Interval>;

    /// Up to `n` most recent break intervals, newest first.
    fn breaks(&self, n: usize) -> Result<Vec<Interval>>;

    /// Sum of `actual_duration` for intervals started on `day` (local time)
    /// whose category contains `filter`. Surrounding `%` wildcards are ignored.
    fn category_summary(&self, day: NaiveDate, filter: &str) -> Result<Duration>;
}
