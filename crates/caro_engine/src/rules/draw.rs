//! Draw detection logic for caro.

use super::win::find_any_win;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// A full board with no completed line for either player.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board, win_length: usize) -> bool {
    is_full(board) && find_any_win(board, win_length).is_none()
}
