//! The N×N mark grid.

use crate::action::MoveError;
use crate::rules;
use crate::types::{BoardSize, GameStatus, Player, Position, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// N×N tic-tac-toe board.
///
/// Cloning a board yields a fully independent snapshot; history entries
/// and search scratch boards rely on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: BoardSize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let n = size.dimension();
        Self {
            size,
            squares: vec![Square::Empty; n * n],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.size.dimension()
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.index(row, col).map(|idx| self.squares[idx])
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Read-only view of the grid, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.dimension())
    }

    /// Empty squares in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let n = self.dimension();
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_empty())
            .map(move |(idx, _)| Position::new(idx / n, idx % n))
    }

    /// Number of occupied squares.
    pub fn mark_count(&self) -> usize {
        self.squares.iter().filter(|square| !square.is_empty()).count()
    }

    /// Places `player`'s mark at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinate is off the board
    /// and [`MoveError::CellOccupied`] if the square is already marked. The
    /// board is untouched on error.
    pub fn apply(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let idx = self.index(row, col).ok_or(MoveError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;

        if !self.squares[idx].is_empty() {
            return Err(MoveError::CellOccupied(Position::new(row, col)));
        }

        self.squares[idx] = Square::Occupied(player);
        Ok(())
    }

    /// Removes a trial mark placed during search.
    pub(crate) fn clear(&mut self, position: Position) {
        if let Some(idx) = self.index(position.row, position.col) {
            self.squares[idx] = Square::Empty;
        }
    }

    /// Checks whether `player` owns a full row, column or diagonal.
    pub fn is_winner(&self, player: Player) -> bool {
        rules::is_winner(self, player)
    }

    /// Checks if no empty squares remain.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Derives the game status from the board contents.
    pub fn status(&self) -> GameStatus {
        match rules::winner(self) {
            Some(player) => GameStatus::Won(player),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// The player whose turn it is, assuming X moved first and play alternated.
    pub fn side_to_move(&self) -> Player {
        let count = |p| {
            self.squares
                .iter()
                .filter(|&&square| square == Square::Occupied(p))
                .count()
        };
        if count(Player::X) > count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Formats the board with row and column headers.
    pub fn display(&self) -> String {
        let mut result = String::from("  ");
        for col in 0..self.dimension() {
            result.push_str(&format!(" {col}"));
        }
        for (row, squares) in self.rows().enumerate() {
            result.push_str(&format!("\n{row} "));
            for square in squares {
                result.push(' ');
                result.push(square.symbol());
            }
        }
        result
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.dimension();
        (row < n && col < n).then_some(row * n + col)
    }
}

impl std::fmt::Display for Board {
    /// Compact text form, e.g. `XO./.X./..O`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .rows()
            .map(|row| row.iter().map(|square| square.symbol()).collect())
            .collect();
        write!(f, "{}", rows.join("/"))
    }
}

/// Error building a board from its text or serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board {:?}: {}", input, reason)]
pub struct ParseBoardError {
    /// The input that was rejected.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl ParseBoardError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Unchecked wire form of a [`Board`], validated before use.
#[derive(Deserialize)]
struct BoardRepr {
    size: BoardSize,
    squares: Vec<Square>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = ParseBoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let n = repr.size.dimension();
        if repr.squares.len() != n * n {
            return Err(ParseBoardError::new(
                &format!("{} squares", repr.squares.len()),
                format!("a {} board needs {} squares", repr.size, n * n),
            ));
        }
        Ok(Self {
            size: repr.size,
            squares: repr.squares,
        })
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses rows separated by `/`, using `X`, `O` and `.` (or `_`, `-`, space).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        let size = BoardSize::try_from(rows.len())
            .map_err(|_| ParseBoardError::new(s, format!("{} rows", rows.len())))?;
        let n = size.dimension();

        let mut squares = Vec::with_capacity(n * n);
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().collect();
            if cells.len() != n {
                return Err(ParseBoardError::new(
                    s,
                    format!("row {row} has {} squares, expected {n}", cells.len()),
                ));
            }
            for ch in cells {
                let square = match ch.to_ascii_uppercase() {
                    'X' => Square::Occupied(Player::X),
                    'O' => Square::Occupied(Player::O),
                    '.' | '_' | '-' | ' ' => Square::Empty,
                    other => {
                        return Err(ParseBoardError::new(
                            s,
                            format!("unexpected character {other:?}"),
                        ));
                    }
                };
                squares.push(square);
            }
        }

        Ok(Self { size, squares })
    }
}
