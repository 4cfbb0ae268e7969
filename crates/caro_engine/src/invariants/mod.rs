//! First-class invariants for caro.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for 3-tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod move_count;
pub mod terminal_status;

pub use alternating_turn::AlternatingTurnInvariant;
pub use move_count::MoveCountInvariant;
pub use terminal_status::TerminalStatusInvariant;

/// All caro invariants as a composable set.
pub type CaroInvariants = (
    MoveCountInvariant,
    AlternatingTurnInvariant,
    TerminalStatusInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord, GameState, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(CaroInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new();
        for (row, col) in [(7, 7), (7, 8), (8, 8), (6, 6)] {
            game.play(row, col).unwrap();
        }
        assert!(CaroInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = GameState::new();
        game.play(7, 7).unwrap();

        // Corrupt the board and the turn.
        game.board.set(Coord::new(0, 0), Cell::Occupied(Player::O)).unwrap();
        game.current_player = Player::X;

        let violations = CaroInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, MoveCountInvariant::description());
        assert_eq!(violations[1].description, AlternatingTurnInvariant::description());
    }
}
