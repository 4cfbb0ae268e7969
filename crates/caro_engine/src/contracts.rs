//! Contract-based validation for caro moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::game::GameState;
use crate::invariants::{CaroInvariants, InvariantSet};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once won or drawn.
    #[instrument(skip(game))]
    pub fn check(_mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The coordinate must be on the board.
pub struct InBounds;

impl InBounds {
    /// Fails with [`MoveError::OutOfBounds`] off the board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.board().contains(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(mov.coord))
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] when the cell holds a mark.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty_at(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.coord))
        }
    }
}

/// Composite precondition, checked in order: game not over, in bounds,
/// cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(mov, game)?;
        InBounds::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game still in progress
/// - Coordinate on the board
/// - Cell empty
///
/// Postconditions:
/// - Exactly one more move than before
/// - All [`CaroInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.move_count() != before.move_count() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: move count went from {} to {}",
                before.move_count(),
                after.move_count()
            )));
        }

        CaroInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
