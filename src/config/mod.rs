//! Configuration management module
//!
//! Handles loading and validation of the optional user preferences file.
//! Hunt content is fixed and never read from here.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use crate::{HuntError, Result, APP_NAME, CONFIG_FILE};

const MIN_TICK_RATE: Duration = Duration::from_millis(10);
const MAX_TICK_RATE: Duration = Duration::from_secs(5);

/// User preferences
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HuntConfig {
    /// How long the event loop waits for a key before redrawing
    #[serde(deserialize_with = "deserialize_duration")]
    pub tick_rate: Duration,
    /// Log level name (off, error, warn, info, debug, trace)
    pub log_level: String,
    /// Whether to show the key hint bar at the bottom of each screen
    pub show_key_hints: bool,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            log_level: "info".to_string(),
            show_key_hints: true,
        }
    }
}

/// Accepts humantime strings such as "250ms" or "1s"
fn deserialize_duration<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}

impl HuntConfig {
    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate < MIN_TICK_RATE || self.tick_rate > MAX_TICK_RATE {
            return Err(HuntError::ConfigError(format!(
                "Tick rate must be between {} and {} (got {})",
                humantime::format_duration(MIN_TICK_RATE),
                humantime::format_duration(MAX_TICK_RATE),
                humantime::format_duration(self.tick_rate)
            )));
        }

        self.level_filter()?;
        Ok(())
    }

    /// Parsed log level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            HuntError::ConfigError(format!("Unknown log level: {}", self.log_level))
        })
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| HuntError::ConfigError(
                format!("Failed to read config file {}: {}", path.display(), e)
            ))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| HuntError::ConfigError(
                format!("Failed to parse config file {}: {}", path.display(), e)
            ))?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/treasure_hunt/treasure_hunt.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HuntError::ConfigError(
                "Unable to determine config directory".to_string()
            ))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
