//! Win detection logic for caro.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

use crate::position::{Coord, Direction};
use crate::types::{Board, Cell, Player};

/// Cells forming a completed line for one player.
///
/// Cells are ordered as the played cell, then the run walking forward along
/// [`direction`](Self::direction), then the run walking backward. Only
/// membership matters for highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinningLine {
    /// Axis the line lies on.
    direction: Direction,
    /// Coordinates in the line.
    cells: Vec<Coord>,
}

impl WinningLine {
    /// Number of cells in the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a line produced by [`evaluate_win`].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `coord` is part of the line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Checks whether the mark at `at` completes a line for `player`.
///
/// Walks each axis in order (horizontal, vertical, diagonal down-right,
/// diagonal down-left) both ways from `at`, counting contiguous cells owned
/// by `player`. The first axis reaching `win_length` cells, `at` included,
/// is returned; longer runs count too.
///
/// Returns `None` when no axis qualifies or `at` is off the board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate_win(
    board: &Board,
    at: Coord,
    player: Player,
    win_length: usize,
) -> Option<WinningLine> {
    if !board.contains(at) {
        return None;
    }

    for direction in Direction::iter() {
        let forward = collect_run(board, at, direction, 1, player);
        let backward = collect_run(board, at, direction, -1, player);

        let mut cells = Vec::with_capacity(1 + forward.len() + backward.len());
        cells.push(at);
        cells.extend(forward);
        cells.extend(backward);

        trace!(?direction, run = cells.len(), "Scanned axis");
        if cells.len() >= win_length {
            return Some(WinningLine { direction, cells });
        }
    }

    None
}

/// Scans every occupied cell for a completed line.
///
/// Returns the first line found in row-major order along with its owner.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_any_win(board: &Board, win_length: usize) -> Option<(Player, WinningLine)> {
    board.iter().find_map(|(coord, cell)| {
        let player = cell.owner()?;
        evaluate_win(board, coord, player, win_length).map(|line| (player, line))
    })
}

/// Contiguous cells owned by `player` stepping from `start` (exclusive).
fn collect_run(
    board: &Board,
    start: Coord,
    direction: Direction,
    sense: isize,
    player: Player,
) -> Vec<Coord> {
    let mut run = Vec::new();
    let mut step = sense;
    while let Some(next) = start.offset(direction, step) {
        if board.get(next) != Some(Cell::Occupied(player)) {
            break;
        }
        run.push(next);
        step += sense;
    }
    run
}
