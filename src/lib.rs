//! logsift - heuristic reducer for verbose application logs
//!
//! Classifies each log line as noise, important or ordinary, collapses large
//! embedded JSON payloads into one-line synopses, and optionally prepends a
//! summary block with counters over the reduced output.

pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod filtering;
pub mod io;
pub mod patterns;
pub mod summary;

pub use error::{LogsiftError, Result};
