//! Application configuration.
//!
//! Settings live in `config.json` inside the application data directory
//! (see [`DataStorage`]). A missing file means defaults. Durations are whole
//! minutes; zero or negative values fall back to the defaults when the
//! [`IntervalConfig`] is built.
//!
//! ```rust,no_run
//! use pomo::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.pomodoro = 50;
//! config.save()?;
//! let intervals = config.interval_config()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::pomodoro::{IntervalConfig, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_POMODORO_MINUTES, DEFAULT_SHORT_BREAK_MINUTES};
use crate::db::intervals::Intervals;
use crate::db::memory::MemoryIntervals;
use crate::db::repository::Repository;
use anyhow::Result;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::sync::Arc;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where interval history is kept.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite file in the data directory.
    #[default]
    Sqlite,
    /// Process memory; history is lost on exit.
    Memory,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Work interval length in minutes.
    pub pomodoro: i64,
    /// Short break length in minutes.
    pub short_break: i64,
    /// Long break length in minutes.
    pub long_break: i64,
    #[serde(default)]
    pub storage: StorageBackend,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pomodoro: DEFAULT_POMODORO_MINUTES,
            short_break: DEFAULT_SHORT_BREAK_MINUTES,
            long_break: DEFAULT_LONG_BREAK_MINUTES,
            storage: StorageBackend::default(),
        }
    }
}

impl Config {
    /// Loads the configuration file, or defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Opens the configured storage backend.
    pub fn repository(&self) -> Result<Arc<dyn Repository>> {
        let repo: Arc<dyn Repository> = match self.storage {
            StorageBackend::Sqlite => Arc::new(Intervals::new()?),
            StorageBackend::Memory => Arc::new(MemoryIntervals::new()),
        };
        Ok(repo)
    }

    pub fn interval_config(&self) -> Result<IntervalConfig> {
        Ok(self.interval_config_with(self.repository()?))
    }

    /// Minutes that do not fit a duration fall back to the defaults, like
    /// non-positive ones.
    pub fn interval_config_with(&self, repo: Arc<dyn Repository>) -> IntervalConfig {
        IntervalConfig::new(
            repo,
            minutes_or_zero(self.pomodoro),
            minutes_or_zero(self.short_break),
            minutes_or_zero(self.long_break),
        )
    }
}

fn minutes_or_zero(minutes: i64) -> Duration {
    Duration::try_minutes(minutes).unwrap_or_else(Duration::zero)
}
