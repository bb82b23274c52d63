//! Strictly Games - terminal tic-tac-toe
//!
//! Thin presentation shell over the `strictly_tictactoe` engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod input;
mod session;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, ModeArg};
use session::Session;
use std::path::PathBuf;
use strictly_tictactoe::{Board, BoardSize, Controller, GameConfig, best_move};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            mode,
            seed,
            config,
            json,
        } => run_play(size, mode, seed, config, json),
        Command::Analyze { board } => run_analyze(&board),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    size: Option<BoardSize>,
    mode: Option<ModeArg>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    // Flags override the file
    if let Some(size) = size {
        config = config.with_board_size(size);
    }
    if let Some(mode) = mode {
        config = config.with_mode(mode.into());
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    info!(?config, "Starting interactive game");
    let game = Controller::from_config(&config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    println!("Type 'help' for commands.");
    let game = Session::new(game, stdin.lock(), stdout.lock(), json).run()?;

    info!(status = %game.current_status(), "Session ended");
    Ok(())
}

/// Print the best move for the side to move
#[instrument]
fn run_analyze(text: &str) -> Result<()> {
    let board: Board = text.parse().context("Failed to parse board")?;
    if !board.size().supports_search() {
        bail!("Analysis is only available for 3x3 boards");
    }

    let to_move = board.side_to_move();
    println!("{}", board.display());
    println!("Status: {}", board.status());

    match best_move(&board, to_move, to_move.opponent()) {
        Some(position) => println!("Best move for {to_move}: {position}"),
        None => println!("No legal move"),
    }
    Ok(())
}
