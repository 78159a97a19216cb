//! Tic-tac-toe with a perfect-play computer opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure outcome evaluation ([`has_win`], [`empty_cells`], [`is_full`])
//! - **Search**: minimax with alpha-beta pruning and depth-adjusted scores ([`best_move`])
//! - **Session**: live game state, turn order and game mode ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Position, best_move};
//!
//! let board: Board = "OO.XX....".parse().unwrap();
//! assert_eq!(best_move(&board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod search;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, empty_cells, has_win, is_draw, is_full};
pub use search::{
    SCORE_INFINITY, SearchResult, Searcher, WIN_SCORE, best_move, best_move_for, search,
};
pub use session::{COMPUTER, GameMode, GameSession};
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
