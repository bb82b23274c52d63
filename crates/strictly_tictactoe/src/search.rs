//! Move selection: exhaustive minimax for 3×3, uniform random otherwise.
//!
//! The minimax here is deliberately plain. There is no pruning, no
//! transposition table and no depth discount: a win found nine plies
//! down scores the same as an immediate one. Because the result is exact,
//! the chosen move only depends on the tie-break, which is the first
//! row-major square reaching the best score.

use crate::board::Board;
use crate::rules;
use crate::types::{Player, Position};
use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::{debug, instrument};

/// Score of a position the maximizing player has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the minimizing player has won.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Picks the best move for `maximizing` against `minimizing`.
///
/// Returns `None` when the board is already won or full, and on boards
/// too large for exhaustive search. The caller's board is never
/// modified; all trial moves are made on a private copy.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, maximizing: Player, minimizing: Player) -> Option<Position> {
    if !board.size().supports_search() || board.status().is_terminal() {
        return None;
    }

    let mut scratch = board.clone();
    let mut best: Option<(Position, i32)> = None;

    let candidates: Vec<Position> = board.empty_positions().collect();
    for position in candidates {
        if scratch
            .apply(position.row, position.col, maximizing)
            .is_err()
        {
            continue;
        }
        let score = minimax(&mut scratch, false, maximizing, minimizing);
        scratch.clear(position);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }

    debug!(?best, "Search finished");
    best.map(|(position, _)| position)
}

/// Scores `board` from the maximizing player's point of view.
///
/// Terminal checks run against `board` itself at every depth. Trial marks
/// are removed before the next sibling is tried, so `board` is returned
/// to its original contents.
pub fn minimax(board: &mut Board, is_maximizing: bool, maximizing: Player, minimizing: Player) -> i32 {
    if rules::is_winner(board, maximizing) {
        return WIN_SCORE;
    }
    if rules::is_winner(board, minimizing) {
        return LOSS_SCORE;
    }
    if rules::is_full(board) {
        return DRAW_SCORE;
    }

    let mover = if is_maximizing { maximizing } else { minimizing };
    let candidates: Vec<Position> = board.empty_positions().collect();

    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
    for position in candidates {
        if board.apply(position.row, position.col, mover).is_err() {
            continue;
        }
        let score = minimax(board, !is_maximizing, maximizing, minimizing);
        board.clear(position);

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Uniform choice among all empty squares.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let choice = board.empty_positions().choose(rng);
    debug!(?choice, "Random policy picked");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardSize;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn parse(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to move, can complete the middle row.
        let board = parse("XX./OO./X..");
        assert_eq!(
            best_move(&board, Player::O, Player::X),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X threatens the top row; O must block at (0, 2).
        let board = parse("XX./.O./...");
        assert_eq!(
            best_move(&board, Player::O, Player::X),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_no_depth_discount() {
        // X wins at once with (1, 2), but (0, 0) forks three lines and wins
        // two plies later. Both score WIN_SCORE, so the earlier square wins
        // the tie-break.
        let board = parse(".O./XX./.O.");
        let mut scratch = board.clone();
        scratch.apply(0, 0, Player::X).unwrap();
        assert_eq!(
            minimax(&mut scratch, false, Player::X, Player::O),
            WIN_SCORE
        );
        assert_eq!(
            best_move(&board, Player::X, Player::O),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = parse("XXX/OO./...");
        assert_eq!(best_move(&won, Player::O, Player::X), None);

        let drawn = parse("XOX/XOO/OXX");
        assert_eq!(best_move(&drawn, Player::X, Player::O), None);
    }

    #[test]
    fn test_larger_boards_are_not_searched() {
        let board = Board::new(BoardSize::Four);
        assert_eq!(best_move(&board, Player::X, Player::O), None);
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut scratch = parse("X../.O./...");
        let before = scratch.clone();
        minimax(&mut scratch, true, Player::X, Player::O);
        assert_eq!(scratch, before);
    }

    #[test]
    fn test_minimax_terminal_scores() {
        let mut won = parse("OOO/XX./X..");
        assert_eq!(minimax(&mut won, true, Player::O, Player::X), WIN_SCORE);
        assert_eq!(minimax(&mut won, true, Player::X, Player::O), LOSS_SCORE);

        let mut drawn = parse("XOX/XOO/OXX");
        assert_eq!(minimax(&mut drawn, false, Player::X, Player::O), DRAW_SCORE);
    }

    #[test]
    fn test_random_move_is_reproducible_with_seed() {
        let board = Board::new(BoardSize::Five);
        let a = random_move(&board, &mut StdRng::seed_from_u64(42));
        let b = random_move(&board, &mut StdRng::seed_from_u64(42));
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_move_only_picks_empty_squares() {
        let board = parse("XOXO/OXOX/XOXO/OX..");
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let choice = random_move(&board, &mut rng).unwrap();
            assert_eq!(choice.row, 3);
            assert!(choice.col == 2 || choice.col == 3);
        }
    }

    #[test]
    fn test_random_move_full_board() {
        let board = parse("XOXO/OXOX/XOXO/OXOX");
        assert!(board.is_full());
        assert_eq!(random_move(&board, &mut StdRng::seed_from_u64(0)), None);
    }
}
