//! Engine configuration: board variant, difficulty → depth table and pacing
//!
//! Two presets mirror the shipped variants:
//!
//! | preset    | board | K | medium   | hard      |
//! |-----------|-------|---|----------|-----------|
//! | `classic` | 3×3   | 3 | 5 plies  | unlimited |
//! | `large`   | 4×4   | 3 | 4 plies  | 6 plies   |
//!
//! Unlimited depth is only accepted when the whole board has at most
//! [`MAX_UNLIMITED_CELLS`] cells; beyond that the full game tree cannot be
//! walked in interactive time and a finite bound is mandatory.

use std::time::Duration;

use crate::board::MAX_BOARD_SIZE;
use crate::engine::Difficulty;
use crate::rules::RuleSet;

/// Largest board (in cells) on which an unlimited search is accepted
pub const MAX_UNLIMITED_CELLS: usize = 9;

/// Default pause between moves when two AIs play each other
pub const DEFAULT_AI_VS_AI_DELAY: Duration = Duration::from_millis(500);

/// Rejected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("board size must be at least 1")]
    BoardTooSmall,
    #[display("board size {_0} exceeds the maximum of {}", MAX_BOARD_SIZE)]
    BoardTooLarge(#[error(not(source))] usize),
    #[display("win length must be at least 1")]
    WinLengthTooSmall,
    #[display("win length {win_length} exceeds board size {board_size}")]
    WinLengthExceedsBoard { win_length: usize, board_size: usize },
    #[display(
        "unlimited search depth on a board with {cells} cells (at most {} allowed)",
        MAX_UNLIMITED_CELLS
    )]
    UnboundedDepth { cells: usize },
    #[display("{_0} difficulty needs a search depth of at least one ply")]
    ZeroDepth(#[error(not(source))] Difficulty),
}

/// Maximum number of plies the search explores below a candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DepthLimit {
    #[display("unlimited")]
    Unlimited,
    #[display("{_0} plies")]
    Plies(u32),
}

impl DepthLimit {
    /// Whether a node at `depth` falls back to static evaluation
    #[inline]
    pub fn reached(self, depth: u32) -> bool {
        match self {
            DepthLimit::Unlimited => false,
            DepthLimit::Plies(limit) => depth >= limit,
        }
    }

    /// `0` is read as unlimited, as on the command line
    pub fn from_plies(plies: u32) -> Self {
        if plies == 0 {
            DepthLimit::Unlimited
        } else {
            DepthLimit::Plies(plies)
        }
    }
}

/// Difficulty → depth mapping for the search-backed difficulties.
/// Easy never searches and has no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthTable {
    pub medium: DepthLimit,
    pub hard: DepthLimit,
}

impl DepthTable {
    /// Table for boards small enough to solve outright
    pub const CLASSIC: DepthTable = DepthTable {
        medium: DepthLimit::Plies(5),
        hard: DepthLimit::Unlimited,
    };

    /// Table for boards where the full tree is out of reach
    pub const BOUNDED: DepthTable = DepthTable {
        medium: DepthLimit::Plies(4),
        hard: DepthLimit::Plies(6),
    };

    /// Depth used for `difficulty`, `None` for the heuristic-only level
    pub fn limit(&self, difficulty: Difficulty) -> Option<DepthLimit> {
        match difficulty {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(self.medium),
            Difficulty::Hard => Some(self.hard),
        }
    }

    /// Check every entry against the board's cell count
    pub fn validate(&self, cells: usize) -> Result<(), ConfigError> {
        for (difficulty, limit) in [
            (Difficulty::Medium, self.medium),
            (Difficulty::Hard, self.hard),
        ] {
            match limit {
                DepthLimit::Unlimited if cells > MAX_UNLIMITED_CELLS => {
                    return Err(ConfigError::UnboundedDepth { cells });
                }
                DepthLimit::Plies(0) => return Err(ConfigError::ZeroDepth(difficulty)),
                _ => {}
            }
        }
        Ok(())
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub board_size: usize,
    pub win_length: usize,
    pub depths: DepthTable,
    /// Presentation pacing only; never read by the search
    pub ai_vs_ai_delay: Duration,
}

impl EngineConfig {
    /// Standard 3×3 board, 3 in a row
    pub fn classic() -> Self {
        Self {
            board_size: 3,
            win_length: 3,
            depths: DepthTable::CLASSIC,
            ai_vs_ai_delay: DEFAULT_AI_VS_AI_DELAY,
        }
    }

    /// 4×4 board, 3 in a row
    pub fn large() -> Self {
        Self {
            board_size: 4,
            win_length: 3,
            depths: DepthTable::BOUNDED,
            ai_vs_ai_delay: DEFAULT_AI_VS_AI_DELAY,
        }
    }

    /// Arbitrary variant with the depth table picked by board area
    pub fn for_board(board_size: usize, win_length: usize) -> Self {
        let depths = if board_size * board_size <= MAX_UNLIMITED_CELLS {
            DepthTable::CLASSIC
        } else {
            DepthTable::BOUNDED
        };
        Self {
            board_size,
            win_length,
            depths,
            ai_vs_ai_delay: DEFAULT_AI_VS_AI_DELAY,
        }
    }

    /// Replace the depth table
    #[must_use]
    pub fn with_depths(mut self, depths: DepthTable) -> Self {
        self.depths = depths;
        self
    }

    /// Replace the AI-vs-AI pause
    #[must_use]
    pub fn with_ai_vs_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_vs_ai_delay = delay;
        self
    }

    /// Validate the whole configuration and return its rule set
    pub fn validate(&self) -> Result<RuleSet, ConfigError> {
        let rules = RuleSet::new(self.board_size, self.win_length)?;
        self.depths.validate(rules.cell_count())?;
        Ok(rules)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::classic()
    }
}
