//! Command-line interface for caro_hub.

use caro_hub::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Caro Hub - five in a row on a 15x15 board
#[derive(Parser, Debug)]
#[command(name = "caro_hub")]
#[command(about = "Play or replay caro (five in a row) games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (optional, defaults apply when missing)
    #[arg(short, long, default_value = "caro_hub.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Board overrides shared by every command.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct BoardArgs {
    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Marks in a row needed to win
    #[arg(long)]
    pub win_length: Option<usize>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Board overrides
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Replay a move list and print the result
    Replay {
        /// Moves in notation, separated by commas or spaces (e.g. "H8,I9,H9")
        moves: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Board overrides
        #[command(flatten)]
        board: BoardArgs,
    },
}
