//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};

/// The eight lines that win the game: rows, columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `player` occupies all three squares of any winning line.
pub fn has_win(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. O is checked first, the same order the search
/// scores terminal boards in.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::O, Player::X]
        .into_iter()
        .find(|&player| has_win(board, player))
}
