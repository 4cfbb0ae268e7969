//! Caro hub - terminal front end for the caro board engine
//!
//! # Architecture
//!
//! - **Settings**: board size, win length and log file from a TOML file
//! - **Replay**: plays a move list non-interactively and summarizes the result
//! - **TUI**: interactive two-player game on one keyboard
//!
//! # Example
//!
//! ```
//! use caro_hub::{OutputFormat, render, run_replay};
//! use caro_engine::BoardConfig;
//!
//! let game = run_replay(BoardConfig::default(), "H8 A1 I8 A2 J8 A3 K8 A4 L8")?;
//! assert_eq!(game.winner(), Some(caro_engine::Player::X));
//! let json = render(&game, OutputFormat::Json)?;
//! assert!(json.contains("\"won\""));
//! # Ok::<(), caro_hub::ReplayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod replay;
mod settings;
pub mod tui;

pub use replay::{
    OutputFormat, ReplayError, ReplaySummary, parse_moves, render, run_replay, status_line,
};
pub use settings::{HubSettings, SettingsError};
