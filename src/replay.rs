//! Non-interactive replay of a move list.

use caro_engine::{BoardConfig, Coord, GameState, GameStatus, NotationError, Player, RejectedMove};
use derive_more::{Display, Error, From};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// How a replayed game is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Board drawing plus a status line.
    #[default]
    Text,
    /// [`ReplaySummary`] as JSON.
    Json,
}

/// Error replaying a move list.
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// A move could not be parsed.
    #[display("Bad move notation: {}", _0)]
    Notation(NotationError),

    /// A move was rejected by the engine.
    #[display("{}", _0)]
    IllegalMove(RejectedMove),

    /// The summary could not be serialized.
    #[display("Failed to serialize summary: {}", _0)]
    Json(serde_json::Error),
}

/// Serializable outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// `in_progress`, `won` or `draw`.
    pub status: &'static str,
    /// Winner, when won.
    pub winner: Option<Player>,
    /// Winning cells in notation, empty unless won.
    pub winning_line: Vec<String>,
    /// Accepted moves.
    pub move_count: usize,
    /// Player to move, absent once the game is over.
    pub next_player: Option<Player>,
    /// Moves in notation.
    pub moves: Vec<String>,
    /// Board rows, `X`, `O` or `.` per cell.
    pub rows: Vec<String>,
}

impl ReplaySummary {
    /// Summarizes a game.
    #[instrument(skip(game), fields(move_count = game.move_count()))]
    pub fn from_game(game: &GameState) -> Self {
        let status = match game.status() {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won { .. } => "won",
            GameStatus::Draw => "draw",
        };
        let rows = game
            .board()
            .rows()
            .map(|cells| {
                cells
                    .iter()
                    .map(|c| match c.owner() {
                        Some(Player::X) => 'X',
                        Some(Player::O) => 'O',
                        None => '.',
                    })
                    .collect()
            })
            .collect();

        Self {
            status,
            winner: game.winner(),
            winning_line: game
                .winning_line()
                .map(|line| line.cells().iter().map(|c| c.notation()).collect())
                .unwrap_or_default(),
            move_count: game.move_count(),
            next_player: (!game.is_over()).then(|| game.current_player()),
            moves: game.history().iter().map(|m| m.coord.notation()).collect(),
            rows,
        }
    }
}

/// Splits a move list on commas and whitespace and parses each move.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Coord>, NotationError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(Coord::parse_notation)
        .collect()
}

/// Plays the moves in `input` on a fresh board.
///
/// The first rejected move aborts the replay.
#[instrument(skip(input))]
pub fn run_replay(config: BoardConfig, input: &str) -> Result<GameState, ReplayError> {
    let moves = parse_moves(input)?;
    info!(moves = moves.len(), "Replaying moves");

    let game = GameState::replay(config, &moves)?;

    debug!(status = %game.status(), "Replay finished");
    Ok(game)
}

/// Formats a replayed game.
#[instrument(skip(game))]
pub fn render(game: &GameState, format: OutputFormat) -> Result<String, ReplayError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ReplaySummary::from_game(game))?),
        OutputFormat::Text => Ok(format!(
            "{}\n\n{}\nMoves: {}",
            game.board().display(),
            status_line(game),
            game.move_count()
        )),
    }
}

/// One-line description of where the game stands.
pub fn status_line(game: &GameState) -> String {
    match game.status() {
        GameStatus::InProgress => format!("In progress, {} to move", game.current_player()),
        GameStatus::Won { winner, line } => {
            let cells: Vec<String> = line.cells().iter().map(|c| c.notation()).collect();
            format!("Player {} wins ({})", winner, cells.join(" "))
        }
        GameStatus::Draw => "Draw".to_string(),
    }
}
