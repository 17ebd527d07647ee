//! Configuration loading for the chime clock trigger.
//!
//! The canonical configuration lives in `chime-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure and provides a loader that reads the file. Every
//! field has a default, so a missing file or an empty document yields a
//! working configuration.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level chime configuration.
///
/// Mirrors the structure of `chime-config.yaml`. No validation is
/// performed beyond what use implies: event names are looked up
/// verbatim and tickover values that the clock can never produce simply
/// never match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChimeConfig {
    /// Host event names to fire, one per tick kind.
    #[serde(default)]
    pub events: EventNamesConfig,

    /// Hour and day tickover points.
    #[serde(default)]
    pub tickover: TickoverConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ChimeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Host event names, one per tick kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventNamesConfig {
    /// The event to fire when the clock ticks up a minute.
    #[serde(default = "default_minute_event")]
    pub minute: String,

    /// The event to fire when the clock ticks up an hour.
    #[serde(default = "default_hour_event")]
    pub hour: String,

    /// The event to fire when the clock ticks up a day.
    #[serde(default = "default_day_event")]
    pub day: String,
}

impl Default for EventNamesConfig {
    fn default() -> Self {
        Self {
            minute: default_minute_event(),
            hour: default_hour_event(),
            day: default_day_event(),
        }
    }
}

/// Tickover points on the 24-hour clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TickoverConfig {
    /// Minute-of-hour at which the new hour is triggered (0-59).
    #[serde(default)]
    pub hour: u32,

    /// Hour-of-day at which the new day is triggered (0-23).
    #[serde(default)]
    pub day: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_minute_event() -> String {
    "realtime_event_minute".to_owned()
}

fn default_hour_event() -> String {
    "realtime_event_hour".to_owned()
}

fn default_day_event() -> String {
    "realtime_event_day".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
