//! Strictly Tic-Tac-Toe - N×N tic-tac-toe engine
//!
//! Pure game logic with no presentation: a host drives a [`Controller`]
//! and polls it for status after every call.
//!
//! # Architecture
//!
//! - **Board**: the mark grid, with win and draw detection in [`rules`]
//! - **MoveHistory**: snapshot stack for single-step undo
//! - **Search**: exhaustive minimax on 3×3, uniform random on larger boards
//! - **Controller**: turn order, game mode, engine replies and hints
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{BoardSize, Controller, GameMode, GameStatus, MoveOutcome};
//!
//! let mut game = Controller::with_seed(BoardSize::Three, GameMode::SinglePlayerVsAi, 0);
//! assert_eq!(game.request_move(0, 0), MoveOutcome::Applied(GameStatus::InProgress));
//! // The engine has already answered.
//! assert_eq!(game.history_len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod controller;
mod history;
pub mod rules;
pub mod search;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use board::{Board, ParseBoardError};
pub use config::{ConfigError, GameConfig};
pub use controller::{AI_PLAYER, Controller, ControllerState};
pub use history::MoveHistory;
pub use search::{best_move, random_move};
pub use types::{BoardSize, GameMode, GameStatus, Player, Position, Square};
