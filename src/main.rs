//! Strictly Rewind - Unified CLI
//!
//! Terminal tic-tac-toe with time travel, plus a headless replay mode.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use strictly_rewind::{LoggingConfig, ReplayFormat, Settings};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Command::Play => run_play(&settings),
        Command::Replay {
            moves,
            jump,
            format,
        } => run_replay(&settings, &moves, jump, format),
    }
}

/// Builds the log filter: `RUST_LOG` wins, then the configured directive.
fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(logging.filter()))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the terminal game
#[instrument(skip_all)]
fn run_play(settings: &Settings) -> Result<()> {
    // Log to a file so output never lands on the game screen
    let log_file = std::fs::File::create(settings.logging().file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.logging().file().display()
        )
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings.logging()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(display = ?settings.display(), "Starting Strictly Rewind");
    strictly_rewind::tui::run(settings)
}

/// Replay a move list and print the result
#[instrument(skip(settings))]
fn run_replay(
    settings: &Settings,
    moves: &[usize],
    jump: Option<usize>,
    format: ReplayFormat,
) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings.logging()))
        .with_writer(std::io::stderr)
        .try_init();

    let state = strictly_rewind::replay(moves, jump);
    debug!(
        len = state.len(),
        step = state.current_step(),
        "Replay finished"
    );

    let output = strictly_rewind::render(&state, settings.display(), format)
        .context("Failed to render replay")?;
    print!("{}", output);
    if format == ReplayFormat::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_configured_directive() {
        // RUST_LOG takes precedence when present
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let settings =
            Settings::from_toml("[logging]\nfilter = \"strictly_rewind=debug\"\n").expect("valid");
        assert_eq!(
            env_filter(settings.logging()).to_string(),
            "strictly_rewind=debug"
        );
    }
}
