//! Turn orchestration: validation, history, terminal detection and the
//! engine's replies.
//!
//! The controller is the only owner of the live board. A move request is
//! either applied in full (mark placed, snapshot pushed, turn handed over)
//! or rejected with nothing changed.

use crate::action::{MoveError, MoveOutcome};
use crate::board::Board;
use crate::config::GameConfig;
use crate::history::MoveHistory;
use crate::search::{best_move, random_move};
use crate::types::{BoardSize, GameMode, GameStatus, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Seat played by the engine in [`GameMode::SinglePlayerVsAi`].
pub const AI_PLAYER: Player = Player::O;

/// Where the game stands, derived from board and turn on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    /// Waiting for this player to move.
    AwaitingMove(Player),
    /// The game is won or drawn; further moves are refused.
    Terminal(GameStatus),
}

/// Owns one game: board, undo history, mode and turn.
///
/// Not reentrant. A host sharing a controller between callers must
/// serialize access itself.
#[derive(Debug, Clone)]
pub struct Controller {
    board: Board,
    history: MoveHistory,
    mode: GameMode,
    current_player: Player,
    rng: StdRng,
}

impl Controller {
    /// Starts a game with an OS-seeded random policy.
    #[instrument]
    pub fn new_game(size: BoardSize, mode: GameMode) -> Self {
        Self::with_rng(size, mode, StdRng::from_os_rng())
    }

    /// Starts a game whose random policy is reproducible.
    #[instrument]
    pub fn with_seed(size: BoardSize, mode: GameMode, seed: u64) -> Self {
        Self::with_rng(size, mode, StdRng::seed_from_u64(seed))
    }

    /// Starts a game using the given random source for boards above 3×3.
    #[instrument(skip(rng))]
    pub fn with_rng(size: BoardSize, mode: GameMode, rng: StdRng) -> Self {
        info!(%size, mode = mode.label(), "New game");
        Self {
            board: Board::new(size),
            history: MoveHistory::new(),
            mode,
            current_player: Player::X,
            rng,
        }
    }

    /// Starts a game from loaded configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        match config.seed() {
            Some(seed) => Self::with_seed(*config.board_size(), *config.mode(), *seed),
            None => Self::new_game(*config.board_size(), *config.mode()),
        }
    }

    /// Plays the current player's mark at (row, col).
    ///
    /// In single-player mode the engine answers immediately when the turn
    /// passes to it, so the returned status already includes its reply.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn request_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        let mut status = match self.play(row, col) {
            Ok(status) => status,
            Err(err) => {
                debug!(%err, "Move rejected");
                return MoveOutcome::Rejected(err);
            }
        };

        while let Some(position) = self.engine_choice() {
            debug!(%position, "Engine replies");
            match self.play(position.row, position.col) {
                Ok(next) => status = next,
                Err(err) => {
                    warn!(%err, "Engine chose an illegal move");
                    break;
                }
            }
        }

        MoveOutcome::Applied(status)
    }

    /// Reverts the most recent ply, human or engine.
    ///
    /// Returns false if there was nothing to undo. Undo is allowed after
    /// the game has ended and reopens it.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        // A finishing move does not hand the turn over, so the mover is
        // still `current_player` in that case.
        let mover = if self.board.status().is_terminal() {
            self.current_player
        } else {
            self.current_player.opponent()
        };

        let Some(snapshot) = self.history.pop() else {
            return false;
        };

        self.board = snapshot;
        self.current_player = mover;
        self.check_consistency();
        debug!(player = %mover, "Undid one ply");
        true
    }

    /// Best move for whoever is to move, without changing anything.
    ///
    /// Only available on 3×3 boards while the game is in progress.
    #[instrument(skip(self))]
    pub fn hint(&self) -> Option<Position> {
        if !self.board.size().supports_search() {
            debug!(size = %self.board.size(), "Hints are only available for 3x3 board");
            return None;
        }
        if self.current_status().is_terminal() {
            return None;
        }
        best_move(&self.board, self.current_player, self.current_player.opponent())
    }

    /// Clears the board and history and gives X the first move.
    ///
    /// With `new_size` the board is reallocated at that dimension.
    #[instrument(skip(self))]
    pub fn reset(&mut self, new_size: Option<BoardSize>) {
        let size = new_size.unwrap_or(self.board.size());
        self.board = Board::new(size);
        self.history.clear();
        self.current_player = Player::X;
        info!(%size, mode = self.mode.label(), "Game reset");
    }

    /// Switches mode, which always starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset(None);
    }

    /// Status derived from the live board.
    pub fn current_status(&self) -> GameStatus {
        self.board.status()
    }

    /// Player whose mark the next accepted move will place.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Read-only view of the live board.
    pub fn board_snapshot(&self) -> &Board {
        &self.board
    }

    /// State machine view of the game.
    pub fn state(&self) -> ControllerState {
        match self.current_status() {
            GameStatus::InProgress => ControllerState::AwaitingMove(self.current_player),
            status => ControllerState::Terminal(status),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Seat the engine plays, if any.
    pub fn ai_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::SinglePlayerVsAi => Some(AI_PLAYER),
            GameMode::TwoPlayer => None,
        }
    }

    /// Number of plies that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Applies one ply for the current player.
    fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        if self.current_status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        let snapshot = self.board.clone();
        self.board.apply(row, col, self.current_player)?;
        self.history.push(snapshot);

        let status = self.board.status();
        if status.is_terminal() {
            info!(%status, "Game over");
        } else {
            self.current_player = self.current_player.opponent();
        }
        self.check_consistency();
        Ok(status)
    }

    /// The engine's move, if it is the engine's turn.
    fn engine_choice(&mut self) -> Option<Position> {
        if self.ai_player() != Some(self.current_player) || self.current_status().is_terminal() {
            return None;
        }

        if self.board.size().supports_search() {
            best_move(&self.board, AI_PLAYER, AI_PLAYER.opponent())
        } else {
            random_move(&self.board, &mut self.rng)
        }
    }

    fn check_consistency(&self) {
        debug_assert_eq!(
            self.history.len(),
            self.board.mark_count(),
            "history depth must match marks on the board"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn two_player() -> Controller {
        Controller::with_seed(BoardSize::Three, GameMode::TwoPlayer, 0)
    }

    #[test]
    fn test_initial_state() {
        let game = two_player();
        assert_eq!(game.state(), ControllerState::AwaitingMove(Player::X));
        assert_eq!(game.history_len(), 0);
        assert_eq!(game.ai_player(), None);
    }

    #[test]
    fn test_turn_alternates_on_success_only() {
        let mut game = two_player();
        assert!(game.request_move(1, 1).is_applied());
        assert_eq!(game.current_player(), Player::O);

        let outcome = game.request_move(1, 1);
        assert_eq!(
            outcome,
            MoveOutcome::Rejected(MoveError::CellOccupied(Position::new(1, 1)))
        );
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut game = two_player();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.request_move(row, col);
        }
        assert_eq!(game.state(), ControllerState::Terminal(GameStatus::Won(Player::X)));

        let before = game.board_snapshot().clone();
        assert_eq!(
            game.request_move(2, 2),
            MoveOutcome::Rejected(MoveError::GameOver)
        );
        assert_eq!(game.board_snapshot(), &before);
    }

    #[test]
    fn test_undo_after_win_reopens_for_winner() {
        let mut game = two_player();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.request_move(row, col);
        }
        assert!(game.undo());
        assert_eq!(game.state(), ControllerState::AwaitingMove(Player::X));
        assert_eq!(game.board_snapshot().get(0, 2), Some(Square::Empty));
    }

    #[test]
    fn test_ai_replies_automatically() {
        let mut game = Controller::with_seed(BoardSize::Three, GameMode::SinglePlayerVsAi, 0);
        assert_eq!(game.request_move(0, 0), MoveOutcome::Applied(GameStatus::InProgress));
        assert_eq!(game.history_len(), 2);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.board_snapshot().get(1, 1), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_set_mode_resets() {
        let mut game = two_player();
        game.request_move(0, 0);
        game.set_mode(GameMode::SinglePlayerVsAi);
        assert_eq!(game.mode(), GameMode::SinglePlayerVsAi);
        assert_eq!(game.history_len(), 0);
        assert_eq!(game.board_snapshot().mark_count(), 0);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_reset_with_new_size() {
        let mut game = two_player();
        game.request_move(0, 0);
        game.request_move(0, 1);
        game.reset(Some(BoardSize::Five));
        assert_eq!(game.board_snapshot().size(), BoardSize::Five);
        assert_eq!(game.history_len(), 0);
        assert_eq!(game.state(), ControllerState::AwaitingMove(Player::X));
    }

    #[test]
    fn test_from_config() {
        let config = GameConfig::new(BoardSize::Four, GameMode::TwoPlayer, Some(9));
        let game = Controller::from_config(&config);
        assert_eq!(game.board_snapshot().size(), BoardSize::Four);
        assert_eq!(game.mode(), GameMode::TwoPlayer);
    }
}
