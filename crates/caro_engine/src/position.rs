//! Board coordinates, scan directions and move notation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A (row, column) pair, zero-based from the top-left corner.
///
/// Displays in move notation: column letter followed by the 1-based row,
/// so `(7, 7)` is `H8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps `steps` cells along `direction` (negative steps walk backwards).
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the board's concern.
    pub fn offset(self, direction: Direction, steps: isize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(steps)?)?;
        Some(Self { row, col })
    }

    /// Letter labelling a column (`0` is `A`).
    ///
    /// Columns past `Z` are shown as `?`; board configs never go that wide.
    pub fn column_letter(col: usize) -> char {
        u8::try_from(col)
            .ok()
            .filter(|c| *c < 26)
            .map(|c| char::from(b'A' + c))
            .unwrap_or('?')
    }

    /// Formats the coordinate in move notation (`H8`).
    pub fn notation(self) -> String {
        format!("{}{}", Self::column_letter(self.col), self.row.saturating_add(1))
    }

    /// Parses move notation such as `H8` or `h8`.
    #[instrument]
    pub fn parse_notation(s: &str) -> Result<Self, NotationError> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or(NotationError::Empty)?
            .to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(NotationError::BadColumn(s.to_string()));
        }
        let col = usize::from(letter as u8 - b'A');

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NotationError::BadRow(s.to_string()));
        }
        let row: usize = digits
            .parse()
            .map_err(|_| NotationError::BadRow(s.to_string()))?;
        if row == 0 {
            return Err(NotationError::BadRow(s.to_string()));
        }

        Ok(Self::new(row - 1, col))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

impl FromStr for Coord {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_notation(s)
    }
}

/// Error parsing move notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// Nothing to parse.
    #[display("Empty move notation")]
    Empty,
    /// The column letter is missing or not A-Z.
    #[display("Invalid column in move {:?} (expected a letter A-Z)", _0)]
    BadColumn(String),
    /// The row number is missing, zero or not a number.
    #[display("Invalid row in move {:?} (expected a number from 1)", _0)]
    BadRow(String),
}

impl std::error::Error for NotationError {}

/// One of the four line axes a win can lie on.
///
/// Iteration order (via [`strum::IntoEnumIterator`]) is the order wins are
/// searched in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Left to right, `(0, 1)`.
    Horizontal,
    /// Top to bottom, `(1, 0)`.
    Vertical,
    /// Down and to the right, `(1, 1)`.
    DiagonalDown,
    /// Down and to the left, `(1, -1)`.
    AntiDiagonal,
}

impl Direction {
    /// Row and column step of one move along this axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}
