//! Game rules for caro.
//!
//! This module contains pure functions for evaluating board state
//! according to five-in-a-row rules. Rules are separated from board
//! storage to enable composition into contract systems.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, evaluate_win, find_any_win};
