//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, played by the computer).
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

    /// Board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so a fixed-size array of
/// three-valued squares is the only state a board can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            match self.get(pos) {
                Square::Empty => result.push_str(&(pos.to_index() + 1).to_string()),
                Square::Occupied(player) => result.push(player.symbol()),
            }
            if pos.col() < 2 {
                result.push('|');
            } else if pos.row() < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact nine-character form, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(player) => player.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// A character was not a mark or an empty marker.
    #[display("Invalid square '{}' at index {}", _0, _1)]
    InvalidSquare(char, usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`/`O` (any case) as marks and `.`, `-`, `_` or space as empty.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim_end_matches(['\n', '\r']).chars().collect();
        if chars.len() != 9 {
            return Err(BoardParseError::WrongLength(chars.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (idx, c) in chars.into_iter().enumerate() {
            squares[idx] = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => return Err(BoardParseError::InvalidSquare(other, idx)),
            };
        }
        Ok(Self::from_squares(squares))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
