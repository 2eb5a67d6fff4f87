//! Front-end settings loaded from TOML and overridden by command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_noughts::{Difficulty, GameError, GameMode};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Opponent: "human" for two players, "computer" to play the computer.
    #[serde(default = "default_mode")]
    mode: String,

    /// Computer strength: "easy", "medium" or "hard".
    #[serde(default = "default_difficulty")]
    difficulty: String,

    /// How long the computer "thinks" before replying, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Seed for reproducible computer play.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Log file written while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_mode() -> String {
    "human".to_string()
}

fn default_difficulty() -> String {
    "easy".to_string()
}

fn default_thinking_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_noughts.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            difficulty: default_difficulty(),
            thinking_delay_ms: default_thinking_delay_ms(),
            seed: None,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        settings.game_mode()?;
        info!(mode = %settings.mode, difficulty = %settings.difficulty, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or the defaults when no file is given.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The validated game mode.
    ///
    /// # Errors
    ///
    /// Fails when `mode` or `difficulty` is not a recognised value.
    #[instrument(skip(self))]
    pub fn game_mode(&self) -> Result<GameMode, ConfigError> {
        Ok(GameMode::from_parts(&self.mode, Some(self.difficulty.as_str()))?)
    }

    /// The validated difficulty, used when switching to computer mode.
    #[instrument(skip(self))]
    pub fn difficulty_level(&self) -> Result<Difficulty, ConfigError> {
        Ok(self.difficulty.parse::<Difficulty>()?)
    }

    /// The computer's thinking delay.
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
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

impl From<GameError> for ConfigError {
    #[track_caller]
    fn from(err: GameError) -> Self {
        Self::new(err.to_string())
    }
}
