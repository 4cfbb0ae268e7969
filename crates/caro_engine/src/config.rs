//! Board configuration: side length and win length.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the standard caro board.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Marks in a row needed to win.
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Widest supported board; every column needs a notation letter.
pub const MAX_BOARD_SIZE: usize = 26;

/// Validated board configuration.
///
/// Invariant: `1 <= size <= MAX_BOARD_SIZE` and `1 <= win_length <= size`.
/// Deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    /// Side length of the square board.
    size: usize,
    /// Contiguous marks needed to win.
    win_length: usize,
}

impl BoardConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board size must be between 1 and {}, got {}",
                MAX_BOARD_SIZE, size
            )));
        }
        if win_length == 0 || win_length > size {
            return Err(ConfigError::new(format!(
                "Win length must be between 1 and the board size ({}), got {}",
                size, win_length
            )));
        }
        Ok(Self { size, win_length })
    }

    /// Number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

/// Unvalidated shape used for deserialization.
#[derive(Debug, Deserialize)]
struct RawBoardConfig {
    #[serde(default = "default_size")]
    size: usize,
    #[serde(default = "default_win_length")]
    win_length: usize,
}

fn default_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_win_length() -> usize {
    DEFAULT_WIN_LENGTH
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        Self::new(raw.size, raw.win_length)
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
    fn test_default_is_standard_caro() {
        let config = BoardConfig::default();
        assert_eq!(*config.size(), 15);
        assert_eq!(*config.win_length(), 5);
        assert_eq!(config.cell_count(), 225);
    }

    #[test]
    fn test_bounds() {
        assert!(BoardConfig::new(1, 1).is_ok());
        assert!(BoardConfig::new(26, 5).is_ok());
        assert!(BoardConfig::new(0, 1).is_err());
        assert!(BoardConfig::new(27, 5).is_err());
        assert!(BoardConfig::new(15, 0).is_err());
        assert!(BoardConfig::new(4, 5).is_err());
    }

    #[test]
    fn test_error_mentions_value() {
        let err = BoardConfig::new(40, 5).unwrap_err();
        assert!(err.message.contains("40"));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
