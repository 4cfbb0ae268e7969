//! Application state and logic.

use caro_engine::{BoardConfig, Coord, GameState, GameStatus};
use crossterm::event::KeyCode;
use derive_getters::Getters;
use tracing::{debug, info};

use super::input::move_cursor;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone, Getters)]
pub struct App {
    game: GameState,
    cursor: Coord,
    status_message: String,
}

impl App {
    /// Creates a new application with the cursor in the center of the board.
    pub fn new(config: BoardConfig) -> Self {
        let center = *config.size() / 2;
        let game = GameState::with_config(config);
        let status_message = turn_message(&game);
        Self {
            game,
            cursor: Coord::new(center, center),
            status_message,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                return AppAction::Quit;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play_at_cursor(),
            KeyCode::Char('r') => self.restart(),
            other => {
                self.cursor = move_cursor(self.cursor, other, self.game.board().size());
            }
        }
        AppAction::Continue
    }

    /// Plays the current player's mark under the cursor.
    pub fn play_at_cursor(&mut self) {
        let player = self.game.current_player();
        match self.game.apply_move(self.cursor).cloned() {
            Ok(GameStatus::Won { winner, .. }) => {
                info!(winner = %winner, "Game won");
                self.status_message =
                    format!("{} wins! Press 'r' to restart or 'q' to quit.", winner);
            }
            Ok(GameStatus::Draw) => {
                info!("Game drawn");
                self.status_message =
                    "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string();
            }
            Ok(GameStatus::InProgress) => {
                debug!(player = %player, cell = %self.cursor, "Move applied to UI state");
                self.status_message =
                    format!("{} played {}. {}", player, self.cursor, turn_message(&self.game));
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = format!("{}. {}", e, turn_message(&self.game));
            }
        }
    }

    /// Restarts the game, keeping the board configuration.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.status_message = format!("Game restarted. {}", turn_message(&self.game));
    }
}

fn turn_message(game: &GameState) -> String {
    format!("Player {}'s turn.", game.current_player())
}
