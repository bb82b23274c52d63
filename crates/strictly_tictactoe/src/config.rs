//! Game configuration loaded from TOML.

use crate::types::{BoardSize, GameMode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a new game.
///
/// ```toml
/// board_size = 3
/// mode = "ai"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension (3, 4 or 5).
    #[serde(default)]
    board_size: BoardSize,

    /// Single player against the engine, or two humans.
    #[serde(default)]
    mode: GameMode,

    /// Seed for the random policy used on boards larger than 3×3.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a new game configuration.
    #[instrument]
    pub fn new(board_size: BoardSize, mode: GameMode, seed: Option<u64>) -> Self {
        Self {
            board_size,
            mode,
            seed,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = %config.board_size, mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with the board size replaced.
    pub fn with_board_size(mut self, board_size: BoardSize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Returns a copy with the mode replaced.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy with the seed replaced.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardSize::default(), GameMode::default(), None)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
