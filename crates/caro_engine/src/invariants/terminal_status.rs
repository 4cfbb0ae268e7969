//! Terminal status invariant: the status agrees with the board.

use super::Invariant;
use crate::rules::find_any_win;
use crate::{Cell, GameState, GameStatus};

/// Invariant: the status is justified by the board.
///
/// - In progress: the board still has an empty cell.
/// - Draw: every cell is taken and no line exists.
/// - Won: the line is long enough, entirely the winner's, and runs through
///   the last move, which the winner made.
pub struct TerminalStatusInvariant;

impl Invariant<GameState> for TerminalStatusInvariant {
    fn holds(game: &GameState) -> bool {
        let win_length = *game.config().win_length();

        match game.status() {
            GameStatus::InProgress => game.move_count() < game.config().cell_count(),
            GameStatus::Draw => {
                game.move_count() == game.config().cell_count()
                    && find_any_win(game.board(), win_length).is_none()
            }
            GameStatus::Won { winner, line } => {
                let Some(last) = game.last_move() else {
                    return false;
                };
                line.len() >= win_length
                    && last.player == *winner
                    && line.contains(last.coord)
                    && line
                        .cells()
                        .iter()
                        .all(|c| game.board().get(*c) == Some(Cell::Occupied(*winner)))
            }
        }
    }

    fn description() -> &'static str {
        "Status matches the board (draw only when full with no line, win only with a line)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Player};

    #[test]
    fn test_in_progress_holds() {
        let mut game = GameState::new();
        game.play(7, 7).unwrap();
        assert!(TerminalStatusInvariant::holds(&game));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut game = GameState::new();
        game.play(7, 7).unwrap();
        game.status = GameStatus::Draw;
        assert!(!TerminalStatusInvariant::holds(&game));
    }

    #[test]
    fn test_won_holds() {
        let mut game = GameState::new();
        for (row, col) in [(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3), (7, 7)] {
            game.play(row, col).unwrap();
        }
        assert_eq!(game.winner(), Some(Player::X));
        assert!(TerminalStatusInvariant::holds(&game));
    }

    #[test]
    fn test_won_with_foreign_cell_violates() {
        let mut game = GameState::new();
        for (row, col) in [(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3), (7, 7)] {
            game.play(row, col).unwrap();
        }
        game.board.set(Coord::new(7, 4), Cell::Occupied(Player::O)).unwrap();
        assert!(!TerminalStatusInvariant::holds(&game));
    }
}
