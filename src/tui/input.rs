//! Cursor movement for keyboard navigation.

use caro_engine::Coord;
use crossterm::event::KeyCode;

/// Moves the cursor one cell with arrow keys or `hjkl`, clamped to the board.
pub fn move_cursor(cursor: Coord, key: KeyCode, size: usize) -> Coord {
    let last = size.saturating_sub(1);

    match key {
        KeyCode::Left | KeyCode::Char('h') => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Coord::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up | KeyCode::Char('k') => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down | KeyCode::Char('j') => Coord::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Home => Coord::new(cursor.row, 0),
        KeyCode::End => Coord::new(cursor.row, last),
        // No change for other keys
        _ => cursor,
    }
}
