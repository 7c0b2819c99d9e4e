//! Game settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "morpion.toml";

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// File receiving log output (the terminal is owned by the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set (e.g. "info,morpion=debug").
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show the 1-9 cell number inside empty cells.
    #[serde(default = "default_true")]
    show_cell_numbers: bool,

    /// Capture mouse clicks on cells and history entries.
    #[serde(default = "default_true")]
    mouse: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("morpion.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_cell_numbers: true,
            mouse: true,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(?settings, "Config loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let settings = Settings::from_toml("mouse = false\nlog_filter = \"debug\"").unwrap();
        assert!(!settings.mouse());
        assert_eq!(settings.log_filter(), "debug");
        assert!(*settings.show_cell_numbers());
        assert_eq!(settings.log_file(), &PathBuf::from("morpion.log"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Settings::from_toml("mouse = \"sometimes\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
