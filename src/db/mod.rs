//! Storage for interval history.
//!
//! The engine talks to a [`repository::Repository`]; two backends implement
//! it. [`intervals::Intervals`] keeps history in SQLite under the data
//! directory and [`memory::MemoryIntervals`] keeps it in process memory.
//!
//! ```rust,no_run
//! use pomo::db::{intervals::Intervals, repository::Repository};
//! use pomo::libs::interval::{Category, Interval};
//!
//! let repo = Intervals::new()?;
//! let id = repo.create(&Interval::new(Category::Pomodoro, chrono::Duration::minutes(25)))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// SQLite connection setup.
pub mod db;

/// SQLite-backed interval repository.
pub mod intervals;

/// In-memory interval repository.
pub mod memory;

/// Versioned schema changes for the SQLite backend.
pub mod migrations;

/// The storage contract shared by both backends.
pub mod repository;
