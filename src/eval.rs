//! Static position evaluation

use crate::board::{Board, Mark};
use crate::rules::has_winning_line;

/// Score of a won position before depth adjustment
pub const WIN_SCORE: i32 = 10;

/// Evaluate a position without lookahead.
///
/// Returns [`WIN_SCORE`] if `maximizer` has a winning alignment, its negation
/// if the opponent does, and 0 otherwise. The maximizer is checked first.
#[inline]
pub fn static_score(board: &Board, maximizer: Mark, win_length: usize) -> i32 {
    if has_winning_line(board, maximizer, win_length) {
        WIN_SCORE
    } else if has_winning_line(board, maximizer.opponent(), win_length) {
        -WIN_SCORE
    } else {
        0
    }
}
