//! Logging utilities
//!
//! The terminal belongs to the TUI, so log records go to a file in the
//! user cache directory.

use crate::{HuntError, Result, APP_NAME, LOG_FILE};
use env_logger::{fmt::TimestampPrecision, Builder, Target};
use log::LevelFilter;
use std::fs::{self, File};
use std::path::PathBuf;

/// Location of the log file: $CACHE_HOME/treasure_hunt/treasure_hunt.log
pub fn log_file_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .ok_or_else(|| HuntError::ConfigError("Unable to determine cache directory".to_string()))?;

    Ok(cache_dir.join(APP_NAME).join(LOG_FILE))
}

/// Initializes the logging system for the application.
///
/// Records from this crate are kept at `level`; other crates are capped
/// at warnings.
///
/// # Errors
///
/// Fails if the log file cannot be created or a logger is already set.
pub fn init_logging(level: LevelFilter) -> Result<PathBuf> {
    let log_path = log_file_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_file = File::options()
        .append(true)
        .create(true)
        .open(&log_path)?;

    Builder::new()
        .filter_level(LevelFilter::Warn.min(level))
        .filter_module("treasure_hunt", level)
        .format_timestamp(Some(TimestampPrecision::Millis))
        .target(Target::Pipe(Box::new(log_file)))
        .try_init()
        .map_err(|e| HuntError::ConfigError(format!("Failed to initialize logger: {}", e)))?;

    Ok(log_path)
}
