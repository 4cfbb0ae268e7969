//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern. While the game is in
/// progress the player to move is next in that pattern; once it is over the
/// last mover stays current.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let alternates = history.iter().enumerate().all(|(i, m)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            m.player == expected
        });
        if !alternates {
            return false;
        }

        let expected_current = match (game.is_over(), history.last()) {
            (true, Some(last)) => last.player,
            (true, None) => return false,
            (false, _) if history.len() % 2 == 0 => Player::X,
            (false, _) => Player::O,
        };

        game.current_player() == expected_current
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Move};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameState::new();
        for (row, col) in [(7, 7), (0, 0), (7, 8), (0, 1), (7, 9)] {
            game.play(row, col).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.play(7, 7).unwrap();

        game.history.push(Move::new(Player::X, Coord::new(7, 8)));
        game.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_winner_stays_current() {
        let mut game = GameState::new();
        for (row, col) in [(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3), (7, 7)] {
            game.play(row, col).unwrap();
        }
        assert!(game.is_over());
        assert_eq!(game.current_player(), Player::X);
        assert!(AlternatingTurnInvariant::holds(&game));
    }
}
