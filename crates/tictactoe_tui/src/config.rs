//! Client configuration loaded from TOML and overridden by flags.

use crate::cli::{Cli, ModeChoice};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{GameMode, Marker};
use tracing::{debug, info, instrument};

/// Settings for the terminal client.
///
/// ```toml
/// mode = "ai"        # or "pvp"; omit to show the mode menu
/// ai_marker = "O"
/// log_file = "tictactoe.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Mode to start in; `None` shows the mode menu.
    mode: Option<ModeChoice>,

    /// Marker the AI plays.
    ai_marker: Marker,

    /// Where log output goes.
    log_file: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            mode: None,
            ai_marker: Marker::O,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line flags on top of this configuration.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.mode {
            self.mode = Some(mode);
        }
        if let Some(ai_marker) = cli.ai_marker {
            self.ai_marker = ai_marker;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }

    /// Game mode to start in, if one was chosen.
    pub fn start_mode(&self) -> Option<GameMode> {
        self.mode.map(|mode| match mode {
            ModeChoice::Pvp => GameMode::PlayerVsPlayer,
            ModeChoice::Ai => GameMode::PlayerVsAi {
                ai: self.ai_marker,
            },
        })
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
