//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_core::GameMode;
use tracing::{debug, info, instrument};

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting game mode.
    #[serde(default = "default_mode")]
    mode: GameMode,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,
}

fn default_mode() -> GameMode {
    GameMode::TwoPlayer
}

fn default_computer_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            computer_delay_ms: default_computer_delay_ms(),
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

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, mode: Option<GameMode>, computer_delay_ms: Option<u64>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(delay) = computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        self
    }

    /// The computer delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
