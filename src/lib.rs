//! # Pomo - a pomodoro interval engine
//!
//! Tracks work intervals ("pomodoros") and the breaks between them, picks
//! what comes next, and runs each interval as a one-second-tick timer that
//! persists its progress as it goes.
//!
//! ## Features
//!
//! - **Scheduling**: short and long breaks chosen from interval history
//! - **Timer**: pause, resume and cancel, including from another process
//! - **Storage**: SQLite with migrations, or an in-memory backend
//! - **Summaries**: daily work and break totals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
