//! Core domain types for N×N tic-tac-toe.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns true if nobody has marked this square.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Single-character symbol used by the text form of a board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Board dimension, fixed for the lifetime of a game.
///
/// Only 3×3 boards are small enough for exhaustive search; larger
/// boards fall back to the random policy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// 3×3 board.
    #[default]
    #[strum(to_string = "3x3")]
    Three,
    /// 4×4 board.
    #[strum(to_string = "4x4")]
    Four,
    /// 5×5 board.
    #[strum(to_string = "5x5")]
    Five,
}

impl BoardSize {
    /// Side length of the board.
    pub fn dimension(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Whether full minimax search is attempted at this size.
    pub fn supports_search(self) -> bool {
        matches!(self, BoardSize::Three)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            other => Err(ConfigError::new(format!(
                "Unsupported board size {other} (expected 3, 4 or 5)"
            ))),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.dimension()
    }
}

/// Who controls the second seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum GameMode {
    /// A human plays X against the engine playing O.
    #[default]
    #[serde(rename = "ai", alias = "single_player_vs_ai")]
    SinglePlayerVsAi,
    /// Two humans share the board.
    #[serde(rename = "two_player", alias = "two-player")]
    TwoPlayer,
}

impl GameMode {
    /// Display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::SinglePlayerVsAi => "AI",
            GameMode::TwoPlayer => "2 Players",
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{player} wins!"),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// A coordinate on the board, zero-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}
