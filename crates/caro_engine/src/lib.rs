//! Caro engine - five-in-a-row game logic.
//!
//! The engine owns the grid, the turn order, move application and win/draw
//! detection. It has no I/O: rendering surfaces read a [`GameState`] and
//! hand move intents back to it.
//!
//! # Example
//!
//! ```
//! use caro_engine::{Coord, GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for col in 3..7 {
//!     game.play(7, col).unwrap();
//!     game.play(0, col).unwrap();
//! }
//! game.play(7, 7).unwrap();
//!
//! assert_eq!(game.winner(), Some(Player::X));
//! if let GameStatus::Won { line, .. } = game.status() {
//!     assert!(line.contains(Coord::new(7, 3)));
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod game;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, RejectedMove};
pub use config::{BoardConfig, ConfigError, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE};
pub use game::{GameState, GameStatus};
pub use position::{Coord, Direction, NotationError};
pub use rules::{WinningLine, evaluate_win};
pub use types::{Board, Cell, Player};
