//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_rewind::ReplayFormat;

/// Strictly Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (overrides STRICTLY_REWIND_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply a move list without a UI and print the result
    Replay {
        /// Board indices 0-8, comma separated, in play order
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to show after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReplayFormat::Text)]
        format: ReplayFormat,
    },
}
