//! Minimax search with alpha-beta pruning.
//!
//! O is the maximizing side and X the minimizing side. Terminal boards
//! score `WIN_SCORE - depth` for an O win and `depth - WIN_SCORE` for an X
//! win, so a faster win always outranks a slower one and completing your own
//! line beats blocking the opponent's.

use crate::rules::{empty_cells, has_win};
use crate::{Board, Player, Position, Square};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Score of a win found at the root, before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Window bound larger than any reachable score.
pub const SCORE_INFINITY: i32 = 1_000;

/// Outcome of a search call: the score and the move that achieves it.
///
/// `position` is `None` for terminal boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from O's point of view.
    pub score: i32,
    /// Best move for the side to move.
    pub position: Option<Position>,
}

/// A mark placed for the duration of one branch.
///
/// Dropping the trial clears the square again, so the board is restored on
/// every exit from the branch, pruning breaks included.
struct Trial<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Trial<'a> {
    fn place(board: &'a mut Board, position: Position, player: Player) -> Self {
        board.set(position, Square::Occupied(player));
        Self { board, position }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, Square::Empty);
    }
}

/// Terminal score for `board`, or `None` if play continues.
fn terminal_score(board: &Board, depth: u8) -> Option<i32> {
    let depth = i32::from(depth);
    if has_win(board, Player::O) {
        Some(WIN_SCORE - depth)
    } else if has_win(board, Player::X) {
        Some(depth - WIN_SCORE)
    } else if empty_cells(board).is_empty() {
        Some(0)
    } else {
        None
    }
}

/// Reusable search driver that counts visited nodes.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `board` with `to_move` to play inside the `(alpha, beta)` window.
    ///
    /// Candidate moves are tried in ascending index order and only a strictly
    /// better score replaces the current best, so ties go to the lowest index.
    /// The board is left exactly as it was passed in. `depth` counts plies
    /// from the root and never exceeds 9 in a real game.
    pub fn search(
        &mut self,
        board: &mut Board,
        to_move: Player,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
    ) -> SearchResult {
        self.nodes += 1;

        if let Some(score) = terminal_score(board, depth) {
            return SearchResult {
                score,
                position: None,
            };
        }

        let mut best = SearchResult {
            score: match to_move {
                Player::O => -SCORE_INFINITY,
                Player::X => SCORE_INFINITY,
            },
            position: None,
        };

        for position in empty_cells(board) {
            let score = {
                let mut trial = Trial::place(board, position, to_move);
                self.search(&mut trial, to_move.opponent(), alpha, beta, depth.saturating_add(1))
                    .score
            };

            match to_move {
                Player::O => {
                    if score > best.score {
                        best = SearchResult {
                            score,
                            position: Some(position),
                        };
                    }
                    alpha = alpha.max(best.score);
                }
                Player::X => {
                    if score < best.score {
                        best = SearchResult {
                            score,
                            position: Some(position),
                        };
                    }
                    beta = beta.min(best.score);
                }
            }

            if beta <= alpha {
                trace!(depth, alpha, beta, ?position, "Pruning remaining moves");
                break;
            }
        }

        best
    }

    /// Full-window search from the root for `player`.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn analyze(&mut self, board: &Board, player: Player) -> SearchResult {
        let before = self.nodes;
        let mut scratch = *board;
        let result = self.search(&mut scratch, player, -SCORE_INFINITY, SCORE_INFINITY, 0);
        debug!(
            score = result.score,
            position = ?result.position,
            nodes = self.nodes - before,
            "Search complete"
        );
        result
    }
}

/// Searches `board` in place with a fresh [`Searcher`].
///
/// The root call uses `depth = 0` and the window
/// `(-SCORE_INFINITY, SCORE_INFINITY)`.
pub fn search(
    board: &mut Board,
    to_move: Player,
    alpha: i32,
    beta: i32,
    depth: u8,
) -> SearchResult {
    Searcher::new().search(board, to_move, alpha, beta, depth)
}

/// Best move for the computer (O).
///
/// Returns `None` when the board is already won or full; there is no move
/// to apply in that case.
pub fn best_move(board: &Board) -> Option<Position> {
    best_move_for(board, Player::O)
}

/// Best move for either side.
pub fn best_move_for(board: &Board, player: Player) -> Option<Position> {
    Searcher::new().analyze(board, player).position
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_terminal_scores_carry_no_move() {
        let mut won_by_o = board("OOOXX.X..");
        let result = search(&mut won_by_o, Player::X, -SCORE_INFINITY, SCORE_INFINITY, 3);
        assert_eq!(
            result,
            SearchResult {
                score: 7,
                position: None
            }
        );

        let mut won_by_x = board("XXXOO.O..");
        let result = search(&mut won_by_x, Player::O, -SCORE_INFINITY, SCORE_INFINITY, 4);
        assert_eq!(result.score, -6);
        assert_eq!(result.position, None);

        let mut drawn = board("XOXOXXOXO");
        let result = search(&mut drawn, Player::O, -SCORE_INFINITY, SCORE_INFINITY, 0);
        assert_eq!(result.score, 0);
        assert_eq!(result.position, None);
    }

    #[test]
    fn test_o_completes_top_row() {
        let mut b = board("OO.XX....");
        let result = search(&mut b, Player::O, -SCORE_INFINITY, SCORE_INFINITY, 0);
        assert_eq!(result.position, Some(Position::TopRight));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn test_x_completes_middle_row() {
        let mut b = board("OO.XX....");
        let result = search(&mut b, Player::X, -SCORE_INFINITY, SCORE_INFINITY, 0);
        assert_eq!(result.position, Some(Position::MiddleRight));
        assert_eq!(result.score, 1 - WIN_SCORE);
    }

    #[test]
    fn test_trial_restores_square_on_drop() {
        let mut b = Board::new();
        {
            let trial = Trial::place(&mut b, Position::Center, Player::O);
            assert_eq!(trial.get(Position::Center), Square::Occupied(Player::O));
        }
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_searcher_counts_nodes() {
        let mut searcher = Searcher::new();
        let result = searcher.analyze(&board("XOXOXXOXO"), Player::O);
        assert_eq!(result.position, None);
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn test_deepest_depth_does_not_overflow() {
        let mut won_by_x = board("XXXOO.O..");
        let result = search(&mut won_by_x, Player::O, -SCORE_INFINITY, SCORE_INFINITY, u8::MAX);
        assert_eq!(result.score, i32::from(u8::MAX) - WIN_SCORE);

        let mut last_square = board("XOXOXXOX.");
        let result = search(&mut last_square, Player::O, -SCORE_INFINITY, SCORE_INFINITY, u8::MAX);
        assert_eq!(result.position, Some(Position::BottomRight));
        assert_eq!(result.score, 0);
        assert_eq!(last_square, board("XOXOXXOX."));
    }
}
