//! Hub settings loaded from a TOML file.

use caro_engine::{BoardConfig, ConfigError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the caro hub.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HubSettings {
    /// Board size and win length.
    #[serde(default)]
    board: BoardConfig,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("caro_hub.log")
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            log_file: default_log_file(),
        }
    }
}

impl HubSettings {
    /// Creates settings from their parts.
    #[instrument(skip(log_file), fields(log_file = %log_file.display()))]
    pub fn new(board: BoardConfig, log_file: PathBuf) -> Self {
        Self { board, log_file }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            size = settings.board.size(),
            win_length = settings.board.win_length(),
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to defaults when it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides for the board.
    #[instrument(skip(self))]
    pub fn with_board_overrides(
        self,
        size: Option<usize>,
        win_length: Option<usize>,
    ) -> Result<Self, SettingsError> {
        let board = BoardConfig::new(
            size.unwrap_or(*self.board.size()),
            win_length.unwrap_or(*self.board.win_length()),
        )?;
        Ok(Self { board, ..self })
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
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

impl From<ConfigError> for SettingsError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        Self::new(err.message)
    }
}
