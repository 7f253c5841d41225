//! Single-ply heuristic policy used by the easy difficulty
//!
//! Priority order:
//! 1. A cell that completes a line for the AI
//! 2. A cell the opponent would complete a line with
//! 3. A uniformly random empty cell
//!
//! The first two checks scan empty cells in row-major order and take the
//! first hit. No recursion, no node counting.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::info;

use crate::board::{Board, Mark, Pos};
use crate::rules::RuleSet;

/// Why the heuristic picked its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HeuristicReason {
    #[display("winning move")]
    Win,
    #[display("blocking move")]
    Block,
    #[display("random move")]
    Random,
}

/// Heuristic policy bound to one rule set
#[derive(Debug, Clone, Copy)]
pub struct HeuristicPolicy {
    rules: RuleSet,
}

impl HeuristicPolicy {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Pick a move for `ai_mark`, or `None` on a full board.
    pub fn choose<R: Rng + ?Sized>(
        &self,
        board: &Board,
        ai_mark: Mark,
        rng: &mut R,
    ) -> Option<(Pos, HeuristicReason)> {
        let empty = self.rules.empty_cells(board);
        let mut work = board.clone();

        if let Some(pos) = self.find_completing_cell(&mut work, &empty, ai_mark) {
            info!(%pos, mark = %ai_mark, "easy AI: winning move");
            return Some((pos, HeuristicReason::Win));
        }

        let opponent = ai_mark.opponent();
        if let Some(pos) = self.find_completing_cell(&mut work, &empty, opponent) {
            info!(%pos, mark = %ai_mark, %opponent, "easy AI: blocking move");
            return Some((pos, HeuristicReason::Block));
        }

        let pos = *empty.choose(rng)?;
        info!(%pos, mark = %ai_mark, available = empty.len(), "easy AI: random move");
        Some((pos, HeuristicReason::Random))
    }

    /// First empty cell where placing `mark` wins for `mark`
    fn find_completing_cell(&self, work: &mut Board, empty: &[Pos], mark: Mark) -> Option<Pos> {
        empty.iter().copied().find(|&pos| {
            work.place(pos, mark);
            let wins = self.rules.is_winning_move_possible(work, mark);
            work.clear(pos);
            wins
        })
    }
}
