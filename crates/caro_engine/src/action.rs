//! First-class move types for caro.
//!
//! Moves are domain events, not side effects. They record who played where
//! and make up the game history.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Coord;
use crate::types::Player;

/// A move: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the coordinate of this move.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Reason a move was rejected.
///
/// A rejected move never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The coordinate is off the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(Coord),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// A replay stopped at a rejected move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Move {} ({}) rejected: {}", index, coord, reason)]
pub struct RejectedMove {
    /// 1-based position in the move list.
    pub index: usize,
    /// The rejected coordinate.
    pub coord: Coord,
    /// Why the move was refused.
    pub reason: MoveError,
}

impl std::error::Error for RejectedMove {}
