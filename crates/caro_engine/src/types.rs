//! Core domain types for caro.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::action::MoveError;
use crate::config::ConfigError;
use crate::position::Coord;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Square caro board stored in row-major order.
///
/// The side length is fixed at creation; only cell contents change.
/// Deserialization rejects a cell list that is not `size²` long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size²`).
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Gets the cell at `coord`, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Overwrites the cell at `coord`.
    ///
    /// This does no rule checking; use [`GameState::apply_move`](crate::GameState::apply_move)
    /// to play a move.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), MoveError> {
        let index = self.index(coord).ok_or(MoveError::OutOfBounds(coord))?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Returns true if the cell at `coord` exists and is empty.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Counts cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Iterates every coordinate paired with its cell.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / size, i % size), *cell))
    }

    /// Formats the board as a human-readable grid with notation labels.
    pub fn display(&self) -> String {
        let mut result = String::from("   ");
        for col in 0..self.size {
            result.push(' ');
            result.push(Coord::column_letter(col));
        }
        for (row, cells) in self.rows().enumerate() {
            result.push('\n');
            result.push_str(&format!("{:>3}", row + 1));
            for cell in cells {
                result.push(' ');
                result.push(match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                });
            }
        }
        result
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.size + coord.col)
    }
}

/// Unvalidated shape used for deserialization.
#[derive(Debug, Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = raw.size.checked_mul(raw.size);
        if expected != Some(raw.cells.len()) {
            return Err(ConfigError::new(format!(
                "Board of size {} has {} cells",
                raw.size,
                raw.cells.len()
            )));
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}
