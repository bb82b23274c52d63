//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_tictactoe::{BoardSize, GameMode};

/// Strictly Games - N×N tic-tac-toe against a minimax engine
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Board size (3, 4 or 5)
        #[arg(short, long, value_parser = parse_board_size)]
        size: Option<BoardSize>,

        /// Game mode
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Seed for the random engine on boards above 3x3
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML game configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Print the board as JSON after every command
        #[arg(long)]
        json: bool,
    },

    /// Print the best move for the side to move on a 3x3 board
    Analyze {
        /// Board in compact form, e.g. "XO./.X./..O"
        board: String,
    },
}

/// Game mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Play X against the engine
    Ai,
    /// Two humans at one keyboard
    TwoPlayer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Ai => GameMode::SinglePlayerVsAi,
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
        }
    }
}

/// Parses "3", "4", "5" or the "3x3" style labels.
pub fn parse_board_size(s: &str) -> Result<BoardSize, String> {
    let digits = s.split('x').next().unwrap_or(s);
    let n: usize = digits
        .trim()
        .parse()
        .map_err(|_| format!("not a board size: {s}"))?;
    BoardSize::try_from(n).map_err(|e| e.message)
}
