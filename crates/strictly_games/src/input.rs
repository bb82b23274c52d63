//! Parsing of interactive commands.

use crate::cli::{ModeArg, parse_board_size};
use clap::ValueEnum;
use strictly_tictactoe::{BoardSize, GameMode};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at (row, col).
    Move(usize, usize),
    /// Revert one ply.
    Undo,
    /// Ask for the best move.
    Hint,
    /// Start over with the same size and mode.
    NewGame,
    /// Start over on a board of this size.
    Size(BoardSize),
    /// Start over in this mode.
    Mode(GameMode),
    /// Print the board again.
    Board,
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Parses a line; `Err` holds a message to show the player.
pub fn parse(line: &str) -> Result<Input, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["undo" | "u"] => Ok(Input::Undo),
        ["hint" | "h"] => Ok(Input::Hint),
        ["new" | "n"] => Ok(Input::NewGame),
        ["board" | "b"] => Ok(Input::Board),
        ["help" | "?"] => Ok(Input::Help),
        ["quit" | "q" | "exit"] => Ok(Input::Quit),
        ["size", size] => parse_board_size(size).map(Input::Size),
        ["mode", mode] => ModeArg::from_str(mode, true)
            .map(|mode| Input::Mode(mode.into()))
            .map_err(|_| format!("unknown mode {mode:?} (ai or two-player)")),
        [row, col] => {
            let row = row.parse().map_err(|_| format!("bad row {row:?}"))?;
            let col = col.parse().map_err(|_| format!("bad column {col:?}"))?;
            Ok(Input::Move(row, col))
        }
        _ => Err(format!("unrecognized command {:?}, try 'help'", line.trim())),
    }
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
commands:
  <row> <col>       place your mark
  undo              take back one move
  hint              suggest a move (3x3 only)
  new               start a new game
  size <3|4|5>      new game on another board
  mode <ai|two-player>
  board             show the board
  quit";
