//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating any well-formed board, including
//! hypothetical positions explored by the search. The session and the
//! engine share these so both agree on what counts as a finished game.

pub mod draw;
pub mod win;

pub use draw::{empty_cells, is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, has_win};
