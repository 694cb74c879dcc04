//! Game configuration loaded from TOML.

use crate::engine::{Mark, Position};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings that shape a new game and its status line.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Mark that moves first.
    #[serde(default)]
    starting_mark: Mark,

    /// How long transient announcements stay visible, in milliseconds.
    #[serde(default = "default_announce_duration_ms")]
    announce_duration_ms: u64,

    /// Cell that holds keyboard focus when the board first appears (0-8).
    #[serde(default)]
    initial_focus: usize,
}

#[instrument]
fn default_announce_duration_ms() -> u64 {
    900
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_mark: Mark::X,
            announce_duration_ms: default_announce_duration_ms(),
            initial_focus: 0,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(starting_mark = %config.starting_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that every field is in range.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Position::from_index(self.initial_focus).is_none() {
            return Err(ConfigError::new(format!(
                "initial_focus must be 0-8, got {}",
                self.initial_focus
            )));
        }
        Ok(())
    }

    /// Transient announcement lifetime.
    pub fn announce_duration(&self) -> Duration {
        Duration::from_millis(self.announce_duration_ms)
    }

    /// Initial focus as a position.
    ///
    /// Out-of-range values fall back to the top-left cell.
    pub fn initial_focus_position(&self) -> Position {
        Position::from_index(self.initial_focus).unwrap_or(Position::TopLeft)
    }

    /// Serializes the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.starting_mark(), Mark::X);
        assert_eq!(config.announce_duration(), Duration::from_millis(900));
        assert_eq!(config.initial_focus_position(), Position::TopLeft);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = GameConfig::from_toml("starting_mark = \"O\"").unwrap();
        assert_eq!(*config.starting_mark(), Mark::O);
        assert_eq!(*config.announce_duration_ms(), 900);
    }

    #[test]
    fn test_invalid_focus_rejected() {
        let err = GameConfig::from_toml("initial_focus = 9").unwrap_err();
        assert!(err.message.contains("initial_focus"));
    }

    #[test]
    fn test_setters() {
        let config = GameConfig::default()
            .with_starting_mark(Mark::O)
            .with_initial_focus(4);
        assert_eq!(*config.starting_mark(), Mark::O);
        assert_eq!(config.initial_focus_position(), Position::Center);
    }
}
