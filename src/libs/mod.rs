//! Core library modules: the interval model, scheduling, the timer, and the
//! configuration and output helpers around them.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod pomodoro;
pub mod scheduler;
pub mod summary;
pub mod timer;
pub mod view;
