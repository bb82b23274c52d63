//! Win detection logic.

use crate::board::Board;
use crate::types::{Player, Square};
use strum::IntoEnumIterator;

/// Checks whether `player` owns a complete line.
///
/// A line is any full row, any full column, the main diagonal or the
/// anti-diagonal. There are no shorter runs: on a 5×5 board a player
/// needs all five squares of a line.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let n = board.dimension();
    let mark = Square::Occupied(player);
    let owns = |row: usize, col: usize| board.get(row, col) == Some(mark);

    let row_or_col = (0..n).any(|i| (0..n).all(|j| owns(i, j)) || (0..n).all(|j| owns(j, i)));
    if row_or_col {
        return true;
    }

    (0..n).all(|i| owns(i, i)) || (0..n).all(|i| owns(i, n - 1 - i))
}

/// Returns the first player (X before O) owning a complete line.
///
/// Both players are checked; a board where both own a line still
/// reports a winner rather than falling through to draw detection.
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| is_winner(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardSize;

    fn parse(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(BoardSize::Three);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = parse("XXX/OO./...");
        assert!(is_winner(&board, Player::X));
        assert!(!is_winner(&board, Player::O));
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = parse("XO./XO./.O.");
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = parse("O.X/.OX/..O");
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = parse("O.X/.XO/X..");
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = parse("XX./.../...");
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_three_in_a_row_is_not_enough_on_larger_boards() {
        let board = parse("XXX./..../..../....");
        assert!(!is_winner(&board, Player::X));

        let board = parse("XXXX/..../..../....");
        assert!(is_winner(&board, Player::X));
    }

    #[test]
    fn test_five_by_five_anti_diagonal() {
        let board = parse("....O/...O./..O../.O.../O....");
        assert!(is_winner(&board, Player::O));
    }

    #[test]
    fn test_both_players_winning_reports_x() {
        // Unreachable by legal play, still must resolve to a winner.
        let board = parse("XXX/OOO/...");
        assert!(is_winner(&board, Player::X));
        assert!(is_winner(&board, Player::O));
        assert_eq!(winner(&board), Some(Player::X));
    }
}
