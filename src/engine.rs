//! Move selection tying the heuristic policy and the alpha-beta search together
//!
//! The selector picks a strategy by difficulty:
//!
//! 1. **Easy**: single-ply heuristic (win, block, random), no search
//! 2. **Medium / Hard**: every empty cell is tried as a candidate for the
//!    maximizing mark and scored by an alpha-beta search with the depth
//!    limit configured for that difficulty
//!
//! Candidates are evaluated in row-major order and the first one with the
//! strictly greatest score is selected, so equal scores resolve to the
//! earliest cell.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Difficulty, EngineConfig, GameMode, Mark, MoveSelector, Pos};
//!
//! let mut selector = MoveSelector::new(EngineConfig::classic()).unwrap();
//! let board: Board = "XX./.../...".parse().unwrap();
//!
//! let mode = GameMode::HumanVsAi { human: Mark::X };
//! let result = selector
//!     .compute_move(&board, mode, Difficulty::Hard, Mark::O)
//!     .unwrap();
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! println!("{} nodes in {}ms", result.nodes, result.time_ms());
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::{Board, Mark, Pos};
use crate::config::{ConfigError, DepthLimit, DepthTable, EngineConfig};
use crate::rules::RuleSet;
use crate::search::{HeuristicPolicy, HeuristicReason, Searcher, INF};

/// Number of ranked candidates reported in logs and the debug panel
pub const TOP_CANDIDATES: usize = 3;

/// AI strength
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display, derive_more::FromStr,
)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// Who controls each mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// One human, one AI. The AI plays the other mark.
    HumanVsAi { human: Mark },
    /// The AI plays both marks
    AiVsAi,
}

impl GameMode {
    /// Mark the search maximizes for when `current` is to move.
    ///
    /// Against a human the AI always maximizes its own mark; in self-play
    /// each side searches as its own maximizer.
    pub fn maximizer(self, current: Mark) -> Mark {
        match self {
            GameMode::HumanVsAi { human } => human.opponent(),
            GameMode::AiVsAi => current,
        }
    }

    /// Whether the AI moves when `current` is to move
    pub fn is_ai_turn(self, current: Mark) -> bool {
        match self {
            GameMode::HumanVsAi { human } => current != human,
            GameMode::AiVsAi => true,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi { human: Mark::X }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsAi { .. } => write!(f, "Human vs AI"),
            GameMode::AiVsAi => write!(f, "AI vs AI"),
        }
    }
}

/// Strategy that produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Easy-level single-ply policy
    Heuristic(HeuristicReason),
    /// Alpha-beta over every candidate move
    AlphaBeta(DepthLimit),
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Heuristic(reason) => write!(f, "heuristic ({reason})"),
            SearchType::AlphaBeta(limit) => write!(f, "alpha-beta ({limit})"),
        }
    }
}

/// A top-level candidate with its search score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMove {
    pub pos: Pos,
    pub score: i32,
}

/// Result of a move computation with its diagnostics.
///
/// Scoped to a single [`MoveSelector::compute_move`] call.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Selected cell
    pub best_move: Option<Pos>,
    /// Search score of the selected cell (0 for the heuristic)
    pub score: i32,
    /// Mark the move was computed for
    pub mark: Mark,
    /// Strategy that produced the move
    pub search_type: SearchType,
    /// Wall time of the computation
    pub elapsed: Duration,
    /// Nodes visited across all candidate searches
    pub nodes: u64,
    /// Every candidate, best first; ties keep row-major order
    pub ranked: Vec<RankedMove>,
}

impl MoveResult {
    /// Elapsed time in whole milliseconds
    #[inline]
    pub fn time_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    /// Best `n` candidates
    pub fn top(&self, n: usize) -> &[RankedMove] {
        &self.ranked[..n.min(self.ranked.len())]
    }
}

/// Move computation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    #[display("no empty cell left to play")]
    NoMovesAvailable,
}

/// AI move selector.
///
/// Owns the validated rule set, the difficulty → depth table and the random
/// source used by the easy policy.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    rules: RuleSet,
    depths: DepthTable,
    rng: StdRng,
}

impl MoveSelector {
    /// Build a selector from a configuration, seeding the easy policy from
    /// the thread RNG.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Build a selector with a deterministic random source
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Result<Self, ConfigError> {
        let rules = config.validate()?;
        Ok(Self {
            rules,
            depths: config.depths,
            rng,
        })
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Compute the AI move for `current` on `board`.
    ///
    /// The board is only read; simulation happens on a private copy.
    /// Fails with [`EngineError::NoMovesAvailable`] on a full board.
    pub fn compute_move(
        &mut self,
        board: &Board,
        mode: GameMode,
        difficulty: Difficulty,
        current: Mark,
    ) -> Result<MoveResult, EngineError> {
        debug_assert_eq!(board.size(), self.rules.board_size());
        let start = Instant::now();

        if board.is_full() {
            return Err(EngineError::NoMovesAvailable);
        }

        let maximizer = mode.maximizer(current);
        info!(player = %current, %maximizer, %difficulty, %mode, "AI move calculation started");

        let Some(depth_limit) = self.depths.limit(difficulty) else {
            let policy = HeuristicPolicy::new(self.rules);
            let (pos, reason) = policy
                .choose(board, maximizer, &mut self.rng)
                .ok_or(EngineError::NoMovesAvailable)?;
            let result = MoveResult {
                best_move: Some(pos),
                score: 0,
                mark: maximizer,
                search_type: SearchType::Heuristic(reason),
                elapsed: start.elapsed(),
                nodes: 0,
                ranked: Vec::new(),
            };
            info!(%pos, %reason, time_ms = result.time_ms(), "easy AI move selected");
            return Ok(result);
        };

        let result = self.search_candidates(board, maximizer, depth_limit, start);
        log_result(&result);
        Ok(result)
    }

    /// Score every empty cell for `maximizer` and keep the first best one
    fn search_candidates(
        &self,
        board: &Board,
        maximizer: Mark,
        depth_limit: DepthLimit,
        start: Instant,
    ) -> MoveResult {
        let mut searcher = Searcher::new(self.rules, maximizer, depth_limit);
        let mut work = board.clone();
        let candidates = self.rules.empty_cells(board);
        debug!(count = candidates.len(), %depth_limit, "evaluating candidate moves");

        let mut ranked = Vec::with_capacity(candidates.len());
        let mut best_move = None;
        let mut best_score = -INF;

        for pos in candidates {
            work.place(pos, maximizer);
            let score = searcher.search(&mut work, 0, -INF, INF, false);
            work.clear(pos);

            debug!(%pos, score, "candidate evaluated");
            ranked.push(RankedMove { pos, score });
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        // Stable: equal scores stay in row-major order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        MoveResult {
            best_move,
            score: best_score,
            mark: maximizer,
            search_type: SearchType::AlphaBeta(depth_limit),
            elapsed: start.elapsed(),
            nodes: searcher.nodes(),
            ranked,
        }
    }
}

fn log_result(result: &MoveResult) {
    for (i, candidate) in result.top(TOP_CANDIDATES).iter().enumerate() {
        let selected = Some(candidate.pos) == result.best_move;
        info!(
            rank = i + 1,
            pos = %candidate.pos,
            score = candidate.score,
            selected,
            "top candidate"
        );
    }
    info!(
        time_ms = result.time_ms(),
        nodes = result.nodes,
        score = result.score,
        "AI move selected: {:?}",
        result.best_move
    );
}
