//! Minimax search with alpha-beta pruning
//!
//! The searcher walks the game tree depth-first on a single working board,
//! placing a mark, recursing, and clearing the cell again before the next
//! sibling is tried. No node is stored; the only state carried across calls
//! is the visited-node counter.
//!
//! Terminal scores are adjusted by depth so that the engine prefers the
//! fastest win and the slowest loss: a win found `d` plies down scores
//! `10 - d`, a loss `-10 + d`.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Mark, RuleSet};
//! use tictactoe::config::DepthLimit;
//! use tictactoe::search::{Searcher, INF};
//!
//! let rules = RuleSet::new(3, 3).unwrap();
//! let mut board: Board = "XX./OO./...".parse().unwrap();
//!
//! // O completes the middle row: the position is already won for O.
//! board.place(tictactoe::Pos::new(1, 2), Mark::O);
//! let mut searcher = Searcher::new(rules, Mark::O, DepthLimit::Unlimited);
//! let score = searcher.search(&mut board, 0, -INF, INF, false);
//! assert_eq!(score, 10);
//! ```

use tracing::trace;

use crate::board::{Board, Mark};
use crate::config::DepthLimit;
use crate::rules::RuleSet;

/// Infinity score for alpha-beta bounds, beyond any depth-adjusted score
pub const INF: i32 = i32::MAX / 2;

/// Alpha-beta searcher for one maximizing mark.
#[derive(Debug, Clone)]
pub struct Searcher {
    rules: RuleSet,
    maximizer: Mark,
    depth_limit: DepthLimit,
    nodes: u64,
}

impl Searcher {
    pub fn new(rules: RuleSet, maximizer: Mark, depth_limit: DepthLimit) -> Self {
        Self {
            rules,
            maximizer,
            depth_limit,
            nodes: 0,
        }
    }

    /// Nodes visited since construction or the last [`Searcher::reset_nodes`]
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Score `board` from the maximizer's point of view.
    ///
    /// `maximizing` tells whose turn it is on `board`. The board is mutated
    /// during the call and restored before it returns.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        // Horizon: static value, not counted as a visited node
        if self.depth_limit.reached(depth) {
            let score = self.rules.static_score(board, self.maximizer);
            trace!(depth, score, "depth limit reached");
            return score;
        }

        self.nodes += 1;

        let score = self.rules.static_score(board, self.maximizer);
        if score > 0 {
            trace!(depth, score, "terminal win");
            return score - depth as i32;
        }
        if score < 0 {
            trace!(depth, score, "terminal loss");
            return score + depth as i32;
        }
        if self.rules.is_draw(board) {
            trace!(depth, "terminal draw");
            return 0;
        }

        let mark = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let moves = self.rules.empty_cells(board);

        if maximizing {
            let mut max_eval = -INF;
            for pos in moves {
                board.place(pos, mark);
                let eval = self.search(board, depth + 1, alpha, beta, false);
                board.clear(pos);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    trace!(depth, alpha, beta, "maximizer cutoff");
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = INF;
            for pos in moves {
                board.place(pos, mark);
                let eval = self.search(board, depth + 1, alpha, beta, true);
                board.clear(pos);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    trace!(depth, alpha, beta, "minimizer cutoff");
                    break;
                }
            }
            min_eval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, MAX_BOARD_SIZE};
    use crate::eval::WIN_SCORE;

    fn classic() -> RuleSet {
        RuleSet::new(3, 3).unwrap()
    }

    #[test]
    fn test_draw_node_scores_zero() {
        let mut board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut searcher = Searcher::new(classic(), Mark::X, DepthLimit::Unlimited);
        assert_eq!(searcher.search(&mut board, 0, -INF, INF, true), 0);
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn test_terminal_win_adjusted_by_depth() {
        let mut board: Board = "OOO/XX./...".parse().unwrap();
        let mut searcher = Searcher::new(classic(), Mark::O, DepthLimit::Unlimited);
        assert_eq!(searcher.search(&mut board, 0, -INF, INF, false), 10);
        assert_eq!(searcher.search(&mut board, 3, -INF, INF, false), 7);
    }

    #[test]
    fn test_terminal_loss_adjusted_by_depth() {
        let mut board: Board = "XXX/OO./...".parse().unwrap();
        let mut searcher = Searcher::new(classic(), Mark::O, DepthLimit::Unlimited);
        assert_eq!(searcher.search(&mut board, 2, -INF, INF, true), -8);
    }

    #[test]
    fn test_depth_limit_returns_static_without_counting() {
        let mut board: Board = "XXX/OO./...".parse().unwrap();
        let mut searcher = Searcher::new(classic(), Mark::O, DepthLimit::Plies(2));
        // Cutoff returns the raw static score, no depth adjustment
        assert_eq!(searcher.search(&mut board, 2, -INF, INF, true), -10);
        assert_eq!(searcher.nodes(), 0);
    }

    #[test]
    fn test_finds_forced_win_for_side_to_move() {
        // X to move as maximizer: (0,2) completes the top row
        let mut board: Board = "XX./OO./...".parse().unwrap();
        let mut searcher = Searcher::new(classic(), Mark::X, DepthLimit::Unlimited);
        let score = searcher.search(&mut board, 0, -INF, INF, true);
        // Win at the child node, depth 1
        assert_eq!(score, 9);
    }

    #[test]
    fn test_minimizer_threat_is_seen() {
        // O to move (minimizing for X) wins at (1,2)
        let mut board: Board = "XX./OO./X..".parse().unwrap();
        let mut searcher = Searcher::new(classic(), Mark::X, DepthLimit::Unlimited);
        assert_eq!(searcher.search(&mut board, 0, -INF, INF, false), -9);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board: Board = "X../.O./...".parse().unwrap();
        let before = board.clone();
        let mut searcher = Searcher::new(classic(), Mark::X, DepthLimit::Unlimited);
        let _ = searcher.search(&mut board, 0, -INF, INF, true);
        assert_eq!(board, before);
        assert!(searcher.nodes() > 0);
    }

    #[test]
    fn test_empty_classic_board_is_a_draw() {
        let mut board = Board::new(3);
        let mut searcher = Searcher::new(classic(), Mark::X, DepthLimit::Unlimited);
        assert_eq!(searcher.search(&mut board, 0, -INF, INF, true), 0);
    }

    #[test]
    fn test_deep_loss_is_not_clamped() {
        // X to move completes the top row 31 plies down
        let mut board: Board = "XX./OOX/OXO".parse().unwrap();
        let mut searcher = Searcher::new(classic(), Mark::O, DepthLimit::Unlimited);
        assert_eq!(searcher.search(&mut board, 30, -INF, INF, false), 21);
    }

    #[test]
    fn test_inf_exceeds_any_terminal_score() {
        let max_depth = (MAX_BOARD_SIZE * MAX_BOARD_SIZE) as i32;
        assert!(INF > WIN_SCORE + max_depth);
    }

    #[test]
    fn test_reset_nodes() {
        let mut board = Board::new(3);
        board.place(Pos::new(1, 1), Mark::X);
        let mut searcher = Searcher::new(classic(), Mark::O, DepthLimit::Plies(2));
        let _ = searcher.search(&mut board, 0, -INF, INF, true);
        assert!(searcher.nodes() > 0);
        searcher.reset_nodes();
        assert_eq!(searcher.nodes(), 0);
    }
}
