//! Treasure Hunt - Caça ao Tesouro
//!
//! A terminal riddle hunt: a home screen, three clue screens that each
//! check a typed answer, and a treasure screen that loops back home.

use std::fmt;

pub mod app;
pub mod config;
pub mod logging;
pub mod models;

// Common error types
#[derive(Debug)]
pub enum HuntError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration parsing or validation error
    ConfigError(String),
    /// TUI rendering or terminal setup error
    TuiError(String),
}

impl fmt::Display for HuntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuntError::IoError(err) => write!(f, "I/O error: {}", err),
            HuntError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            HuntError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for HuntError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HuntError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HuntError {
    fn from(err: std::io::Error) -> Self {
        HuntError::IoError(err)
    }
}

impl From<toml::de::Error> for HuntError {
    fn from(err: toml::de::Error) -> Self {
        HuntError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for treasure hunt operations
pub type Result<T> = std::result::Result<T, HuntError>;

/// Error handling utilities
pub mod error {
    use super::HuntError;

    /// Convert error to a message suitable for printing after the TUI exits
    pub fn user_friendly_message(error: &HuntError) -> String {
        match error {
            HuntError::ConfigError(msg) => {
                format!("Configuration error: {}. Check {}.", msg, super::CONFIG_FILE)
            }
            HuntError::TuiError(_) => {
                "The terminal could not be set up. Try a different terminal emulator.".to_string()
            }
            HuntError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied while accessing config or log files.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common constants
pub const APP_NAME: &str = "treasure_hunt";
pub const CONFIG_FILE: &str = "treasure_hunt.toml";
pub const LOG_FILE: &str = "treasure_hunt.log";
