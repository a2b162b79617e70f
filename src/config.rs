//! Configuration file support for the demo.
//!
//! The configuration is an optional JSON file. Every field has a default, so a
//! partial file (or none at all) is valid.

use std::path::{Path, PathBuf};

use barchart_ui::chart::ChartColors;
use serde::{Deserialize, Serialize};

use crate::ui_constants::{controls, window};

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "BARCHART_CONFIG";

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Log verbosity level
    pub log_level: LogLevel,
    /// Dark theme enabled
    pub dark_theme: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            dark_theme: true,
        }
    }
}

/// Initial window geometry in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: window::DEFAULT_SIZE.0,
            height: window::DEFAULT_SIZE.1,
        }
    }
}

/// Chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Column count the slider starts at
    pub initial_column_count: usize,
    /// How many columns share the chart width
    pub max_visible_column_count: usize,
    /// Let columns grow past their usual cap once the chart is full
    pub fill_width: bool,
    pub colors: ChartColors,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            initial_column_count: controls::DEFAULT_COLUMNS,
            max_visible_column_count: 8,
            fill_width: false,
            colors: ChartColors::default(),
        }
    }
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Version of the configuration file format
    pub version: u32,
    pub preferences: Preferences,
    pub window: WindowConfig,
    pub chart: ChartConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: Preferences::default(),
            window: WindowConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }
        Ok(config)
    }

    /// Initial column count, clamped to the slider's range.
    pub fn initial_column_count(&self) -> usize {
        self.chart
            .initial_column_count
            .clamp(controls::MIN_COLUMNS, controls::MAX_COLUMNS)
    }

    /// Config file location: `$BARCHART_CONFIG`, else the platform config dir.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("barchart-demo").join("config.json"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load from the default path, falling back to defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is not one this build understands
    #[error("Configuration file version {file_version} is not supported (expected {supported_version})")]
    UnsupportedVersion {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let config = DemoConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(DemoConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config =
            DemoConfig::from_json(r#"{ "version": 1, "chart": { "fill_width": true } }"#).unwrap();
        assert!(config.chart.fill_width);
        assert_eq!(config.chart.initial_column_count, 8);
        assert_eq!(config.window, WindowConfig::default());
        assert!(config.preferences.dark_theme);
    }

    #[test]
    fn test_unknown_version_rejected() {
        let err = DemoConfig::from_json(r#"{ "version": 2 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedVersion {
                file_version: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_log_level_lowercase() {
        let config =
            DemoConfig::from_json(r#"{ "preferences": { "log_level": "debug" } }"#).unwrap();
        assert_eq!(config.preferences.log_level, LogLevel::Debug);
        assert_eq!(
            config.preferences.log_level.to_level_filter(),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_initial_count_clamped() {
        let mut config = DemoConfig::default();
        config.chart.initial_column_count = 0;
        assert_eq!(config.initial_column_count(), 1);
        config.chart.initial_column_count = 99;
        assert_eq!(config.initial_column_count(), 20);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "window": { "width": 1024, "height": 700 } }"#).unwrap();
        let config = DemoConfig::load_from(&path).unwrap();
        assert_eq!(config.window.width, 1024);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            DemoConfig::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
