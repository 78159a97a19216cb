//! Draw detection and move enumeration for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Position};

/// Returns every empty position in ascending index order.
///
/// The order is what makes the search deterministic: among equally
/// scored moves the lowest index is found first.
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    empty_cells(board).is_empty()
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(empty_cells(&board), Position::ALL.to_vec());
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!is_full(&board));
        assert_eq!(
            empty_cells(&board),
            vec![
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(empty_cells(&board).is_empty());
        assert!(!super::super::has_win(&board, Player::X));
        assert!(!super::super::has_win(&board, Player::O));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXXOOXOXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
