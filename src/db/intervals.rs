//! SQLite-backed interval history.
//!
//! The durable [`Repository`] implementation. A single connection is shared
//! behind a mutex, which serializes every statement: concurrent callers
//! (the ticking timer and a `pause` issued from another task) never
//! interleave inside one read or write.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::db::intervals::Intervals;
//! use pomo::db::repository::Repository;
//! use pomo::libs::interval::{Category, Interval};
//! use chrono::Duration;
//!
//! let intervals = Intervals::new()?;
//! let id = intervals.create(&Interval::new(Category::Pomodoro, Duration::minutes(25)))?;
//! let stored = intervals.by_id(id)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::db::repository::Repository;
use crate::libs::error::{PomodoroError, Result};
use crate::libs::interval::{Interval, State};
use chrono::{DateTime, Duration, Local, NaiveDate};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Arc;

const INSERT_INTERVAL: &str =
    "INSERT INTO intervals (start_time, planned_duration, actual_duration, category, state) VALUES (?1, ?2, ?3, ?4, ?5)";

/// Only progress and state are mutable; start time, plan and category are
/// fixed at creation.
const UPDATE_INTERVAL: &str = "UPDATE intervals SET actual_duration = ?1, state = ?2 WHERE id = ?3";

const SELECT_BY_ID: &str =
    "SELECT id, start_time, planned_duration, actual_duration, category, state FROM intervals WHERE id = ?1";

const SELECT_LAST: &str =
    "SELECT id, start_time, planned_duration, actual_duration, category, state FROM intervals ORDER BY id DESC LIMIT 1";

const SELECT_BREAKS: &str = "SELECT id, start_time, planned_duration, actual_duration, category, state FROM intervals
     WHERE category LIKE '%Break'
     ORDER BY id DESC LIMIT ?1";

/// `instr` keeps the category match case-sensitive, unlike `LIKE`.
const SELECT_CATEGORY_SUMMARY: &str = "SELECT SUM(actual_duration) FROM intervals
     WHERE instr(category, ?1) > 0
     AND date(start_time, 'localtime') = ?2";

/// Column values as stored, before category and state are validated.
struct IntervalRow {
    id: i64,
    start_time: DateTime<Local>,
    planned_duration: i64,
    actual_duration: i64,
    category: String,
    state: i64,
}

impl IntervalRow {
    fn read(row: &Row) -> rusqlite::Result<Self> {
        Ok(IntervalRow {
            id: row.get(0)?,
            start_time: row.get(1)?,
            planned_duration: row.get(2)?,
            actual_duration: row.get(3)?,
            category: row.get(4)?,
            state: row.get(5)?,
        })
    }

    fn into_interval(self) -> Result<Interval> {
        Ok(Interval {
            id: self.id,
            start_time: self.start_time,
            planned_duration: Duration::nanoseconds(self.planned_duration),
            actual_duration: Duration::nanoseconds(self.actual_duration),
            category: self.category.parse()?,
            state: State::from_code(self.state)?,
        })
    }
}

fn nanos(duration: Duration) -> i64 {
    duration.num_nanoseconds().unwrap_or(i64::MAX)
}

/// Durable interval store on SQLite.
#[derive(Clone)]
pub struct Intervals {
    pub conn: Arc<Mutex<Connection>>,
}

impl Intervals {
    /// Opens the database in the application data directory.
    pub fn new() -> anyhow::Result<Intervals> {
        let db = Db::new()?;
        Ok(Intervals {
            conn: Arc::new(Mutex::new(db.conn)),
        })
    }

    /// Opens (or creates) the database at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Intervals> {
        let db = Db::open(path)?;
        Ok(Intervals {
            conn: Arc::new(Mutex::new(db.conn)),
        })
    }
}

impl Repository for Intervals {
    fn create(&self, interval: &Interval) -> Result<i64> {
        let conn = self.conn.lock();
        conn.execute(
            INSERT_INTERVAL,
            params![
                interval.start_time,
                nanos(interval.planned_duration),
                nanos(interval.actual_duration),
                interval.category.as_str(),
                interval.state.code(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, interval: &Interval) -> Result<()> {
        if interval.id == 0 {
            return Err(PomodoroError::InvalidId(interval.id));
        }
        let conn = self.conn.lock();
        let affected = conn.execute(
            UPDATE_INTERVAL,
            params![nanos(interval.actual_duration), interval.state.code(), interval.id],
        )?;
        if affected == 0 {
            return Err(PomodoroError::InvalidId(interval.id));
        }
        Ok(())
    }

    fn by_id(&self, id: i64) -> Result<Interval> {
        if id == 0 {
            return Err(PomodoroError::InvalidId(id));
        }
        let conn = self.conn.lock();
        conn.query_row(SELECT_BY_ID, params![id], IntervalRow::read)
            .optional()?
            .ok_or(PomodoroError::InvalidId(id))?
            .into_interval()
    }

    fn last(&self) -> Result<Interval> {
        let conn = self.conn.lock();
        conn.query_row(SELECT_LAST, [], IntervalRow::read)
            .optional()?
            .ok_or(PomodoroError::NoIntervals)?
            .into_interval()
    }

    fn breaks(&self, n: usize) -> Result<Vec<Interval>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_BREAKS)?;
        let rows = stmt.query_map(params![n as i64], IntervalRow::read)?;

        let mut breaks = Vec::new();
        for row in rows {
            breaks.push(row?.into_interval()?);
        }
        Ok(breaks)
    }

    fn category_summary(&self, day: NaiveDate, filter: &str) -> Result<Duration> {
        let filter = filter.trim_matches('%');
        let conn = self.conn.lock();
        let total: Option<i64> = conn.query_row(
            SELECT_CATEGORY_SUMMARY,
            params![filter, day.format("%Y-%m-%d").to_string()],
            |row| row.get(0),
        )?;
        Ok(Duration::nanoseconds(total.unwrap_or(0)))
    }
}
