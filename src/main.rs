//! Caro Hub - Unified CLI
//!
//! Interactive play in the terminal and non-interactive replay.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use caro_hub::{HubSettings, OutputFormat, render, run_replay, tui};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { board } => run_play(&cli.config, board),
        Command::Replay {
            moves,
            format,
            board,
        } => run_replay_command(&cli.config, &moves, format, board),
    }
}

/// Loads settings and applies command-line overrides.
#[instrument(skip(path), fields(path = %path.display()))]
fn load_settings(path: &Path, board: BoardArgs) -> Result<HubSettings> {
    let settings = HubSettings::load(path)
        .with_context(|| format!("Loading settings from {}", path.display()))?
        .with_board_overrides(board.size, board.win_length)
        .context("Applying board overrides")?;
    Ok(settings)
}

/// Run the terminal UI
fn run_play(config: &Path, board: BoardArgs) -> Result<()> {
    let settings = load_settings(config, board)?;
    tui::run_tui(&settings)
}

/// Replay a move list and print the outcome
fn run_replay_command(
    config: &Path,
    moves: &str,
    format: OutputFormat,
    board: BoardArgs,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings(config, board)?;
    info!(moves, "Replaying game");

    let game = run_replay(*settings.board(), moves).context("Replay failed")?;
    println!("{}", render(&game, format)?);
    Ok(())
}
