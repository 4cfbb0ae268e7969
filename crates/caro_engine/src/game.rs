//! Turn state and move application for caro.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{Move, MoveError, RejectedMove};
use crate::config::{BoardConfig, ConfigError};
use crate::contracts::{Contract, MoveContract};
use crate::invariants::{CaroInvariants, InvariantSet};
use crate::position::Coord;
use crate::rules;
use crate::rules::WinningLine;
use crate::types::{Board, Cell, Player};

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, .. } => write!(f, "Player {} wins", winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state: board, turn, move count, status and history.
///
/// The only way to change a state is [`apply_move`](Self::apply_move) (or
/// [`play`](Self::play)) and [`reset`](Self::reset). A rejected move leaves
/// every field untouched.
///
/// Deserialization accepts only states reachable by play: the board must
/// match the configuration and every invariant must hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) config: BoardConfig,
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) move_count: usize,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a standard 15x15, five-to-win game.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Creates a fresh game for the given configuration.
    ///
    /// Empty board, X to move, no moves played.
    #[instrument]
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            board: Board::new(*config.size()),
            current_player: Player::X,
            move_count: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the winner, once won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent accepted move.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match &self.status {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match &self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns every empty coordinate, or nothing once the game is over.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.is_over() {
            return Vec::new();
        }
        self.board
            .iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Plays the current player's mark at (`row`, `col`).
    pub fn play(&mut self, row: usize, col: usize) -> Result<&GameStatus, MoveError> {
        self.apply_move(Coord::new(row, col))
    }

    /// Plays the current player's mark at `coord`.
    ///
    /// Rejected without touching the state when the game is over, the
    /// coordinate is off the board, or the cell is taken. Otherwise the mark
    /// is placed and the move evaluated: a completed line ends the game with
    /// the mover still current; a full board is a draw; anything else passes
    /// the turn.
    ///
    /// Postconditions are verified in debug builds.
    #[instrument(skip(self), fields(player = %self.current_player, move_count = self.move_count))]
    pub fn apply_move(&mut self, coord: Coord) -> Result<&GameStatus, MoveError> {
        let action = Move::new(self.current_player, coord);

        if let Err(error) = MoveContract::pre(self, &action) {
            debug!(%error, "Move rejected");
            return Err(error);
        }

        let mut next = self.clone();
        next.board.set(coord, Cell::Occupied(action.player))?;
        next.move_count += 1;
        next.history.push(action);

        let win_length = *next.config.win_length();
        if let Some(line) = rules::evaluate_win(&next.board, coord, action.player, win_length) {
            info!(winner = %action.player, cells = line.len(), "Line completed");
            next.status = GameStatus::Won {
                winner: action.player,
                line,
            };
        } else if next.move_count == next.config.cell_count() {
            info!("Board full, game drawn");
            next.status = GameStatus::Draw;
        } else {
            next.current_player = action.player.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        Ok(&self.status)
    }

    /// Replaces the state with a fresh game of the same configuration.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::with_config(self.config);
    }

    /// Replays moves from a fresh game.
    ///
    /// Unlike interactive play, the first rejected move aborts the replay
    /// and is reported with its 1-based position.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(config: BoardConfig, moves: &[Coord]) -> Result<Self, RejectedMove> {
        let mut game = Self::with_config(config);
        for (i, coord) in moves.iter().enumerate() {
            if let Err(reason) = game.apply_move(*coord) {
                return Err(RejectedMove {
                    index: i + 1,
                    coord: *coord,
                    reason,
                });
            }
        }
        Ok(game)
    }
}

/// Unvalidated shape used for deserialization.
#[derive(Debug, Deserialize)]
struct RawGameState {
    config: BoardConfig,
    board: Board,
    current_player: Player,
    move_count: usize,
    status: GameStatus,
    history: Vec<Move>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if raw.board.size() != *raw.config.size() {
            return Err(ConfigError::new(format!(
                "Board size {} does not match configured size {}",
                raw.board.size(),
                raw.config.size()
            )));
        }

        let game = Self {
            config: raw.config,
            board: raw.board,
            current_player: raw.current_player,
            move_count: raw.move_count,
            status: raw.status,
            history: raw.history,
        };
        CaroInvariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<String> =
                violations.into_iter().map(|v| v.description).collect();
            ConfigError::new(format!("Inconsistent game state: {}", descriptions.join("; ")))
        })?;
        Ok(game)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
