//! Player name configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
use tracing::{debug, info, instrument};

/// Starting names for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name for X.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Display name for O.
    #[serde(default = "default_player_o")]
    player_o: String,
}

fn default_player_x() -> String {
    DEFAULT_X_NAME.to_string()
}

fn default_player_o() -> String {
    DEFAULT_O_NAME.to_string()
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_x = %config.player_x, player_o = %config.player_o, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces whichever names are given.
    pub fn with_overrides(mut self, player_x: Option<String>, player_o: Option<String>) -> Self {
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        self
    }

    /// Builds the starting player registry.
    pub fn registry(&self) -> PlayerRegistry {
        PlayerRegistry::new(self.player_x.clone(), self.player_o.clone())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
        }
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
