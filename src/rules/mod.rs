//! Game rules for K-in-a-row on an N×N board
//!
//! [`RuleSet`] bundles the two parameters that distinguish board variants
//! (edge length and win length) with the pure predicates the search and the
//! game controller need: win detection, draw detection, empty-cell
//! enumeration and static evaluation.

pub mod win;

pub use win::{check_winner, find_winning_line, has_winning_line};

use crate::board::{Board, Mark, Pos, MAX_BOARD_SIZE};
use crate::config::ConfigError;
use crate::eval;

/// Validated board size / win length pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    board_size: usize,
    win_length: usize,
}

impl RuleSet {
    /// Create a rule set, rejecting unsatisfiable configurations.
    ///
    /// # Example
    ///
    /// ```
    /// use tictactoe::RuleSet;
    ///
    /// let rules = RuleSet::new(4, 3).unwrap();
    /// assert_eq!(rules.board_size(), 4);
    /// assert!(RuleSet::new(3, 4).is_err());
    /// ```
    pub fn new(board_size: usize, win_length: usize) -> Result<Self, ConfigError> {
        if board_size == 0 {
            return Err(ConfigError::BoardTooSmall);
        }
        if board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(board_size));
        }
        if win_length == 0 {
            return Err(ConfigError::WinLengthTooSmall);
        }
        if win_length > board_size {
            return Err(ConfigError::WinLengthExceedsBoard {
                win_length,
                board_size,
            });
        }
        Ok(Self {
            board_size,
            win_length,
        })
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells on a board of this variant
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Fresh empty board of the configured size
    pub fn new_board(&self) -> Board {
        Board::new(self.board_size)
    }

    /// Whether `mark` has K aligned cells anywhere on the board
    #[inline]
    pub fn is_winning_move_possible(&self, board: &Board, mark: Mark) -> bool {
        debug_assert_eq!(board.size(), self.board_size);
        has_winning_line(board, mark, self.win_length)
    }

    /// Cells of the first winning window for `mark`
    pub fn winning_line(&self, board: &Board, mark: Mark) -> Option<Vec<Pos>> {
        find_winning_line(board, mark, self.win_length)
    }

    /// Mark that has won, if any
    pub fn winner(&self, board: &Board) -> Option<Mark> {
        check_winner(board, self.win_length)
    }

    /// Board has no empty cell. Only meaningful once no win is present.
    #[inline]
    pub fn is_draw(&self, board: &Board) -> bool {
        board.is_full()
    }

    /// Won by either side or full
    pub fn is_terminal(&self, board: &Board) -> bool {
        self.winner(board).is_some() || self.is_draw(board)
    }

    /// Empty cells in stable row-major order
    pub fn empty_cells(&self, board: &Board) -> Vec<Pos> {
        board.empty_cells().collect()
    }

    /// `+10` / `-10` / `0` from the maximizer's point of view
    #[inline]
    pub fn static_score(&self, board: &Board, maximizer: Mark) -> i32 {
        eval::static_score(board, maximizer, self.win_length)
    }
}
