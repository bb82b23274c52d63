//! Move requests and their outcomes.
//!
//! Every rejection is a pure no-op: the board, history and turn are left
//! exactly as they were.

use crate::types::{BoardSize, GameStatus, Position};
use serde::{Deserialize, Serialize};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("({row}, {col}) is off the {size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Size of the board the request was made against.
        size: BoardSize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was played; carries the status after any engine reply.
    Applied(GameStatus),
    /// The move was refused and nothing changed.
    Rejected(MoveError),
}

impl MoveOutcome {
    /// Returns true if the move was played.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<MoveError> {
        match self {
            MoveOutcome::Applied(_) => None,
            MoveOutcome::Rejected(err) => Some(*err),
        }
    }
}
