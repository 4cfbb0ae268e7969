//! Move count invariant: the counter matches the board and the history.

use super::Invariant;
use crate::{Cell, GameState};

/// Invariant: move count equals occupied cells and history length.
///
/// Every history entry's cell holds that entry's mark.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(game: &GameState) -> bool {
        let count = game.move_count();

        count == game.board().occupied_count()
            && count == game.history().len()
            && game
                .history()
                .iter()
                .all(|m| game.board().get(m.coord) == Some(Cell::Occupied(m.player)))
    }

    fn description() -> &'static str {
        "Move count matches occupied cells and move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(MoveCountInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = GameState::new();
        game.play(0, 0).unwrap();
        game.play(14, 14).unwrap();
        assert!(MoveCountInvariant::holds(&game));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_stray_mark_violates() {
        let mut game = GameState::new();
        game.play(0, 0).unwrap();
        game.board.set(Coord::new(1, 1), Cell::Occupied(Player::O)).unwrap();
        assert!(!MoveCountInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = GameState::new();
        game.play(0, 0).unwrap();
        game.board.set(Coord::new(0, 0), Cell::Occupied(Player::O)).unwrap();
        assert!(!MoveCountInvariant::holds(&game));
    }
}
