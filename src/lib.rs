//! Tic-tac-toe AI engine for K-in-a-row on small square boards
//!
//! Plays the generalized game on an N×N board where the first side to align
//! K marks in a row, column or diagonal wins:
//! - Classic 3×3 board, 3 in a row
//! - 4×4 board, 3 in a row
//! - Any size up to 16×16 with `1 ≤ K ≤ N`
//!
//! # Architecture
//!
//! - [`board`]: Marks, cells, positions and the board grid
//! - [`rules`]: Win and draw detection for a board size / win length pair
//! - [`eval`]: Static evaluation of a position
//! - [`search`]: Alpha-beta minimax and the single-ply heuristic
//! - [`engine`]: Move selection by difficulty, with diagnostics
//! - [`config`]: Board presets and the difficulty → depth table
//! - [`game`]: Authoritative game state and move application
//! - [`session`]: Per-game timing and node statistics
//! - [`ui`]: egui frontend
//! - [`cli`]: Command-line flags and logging setup for the binaries
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Difficulty, EngineConfig, Game, GameMode, Mark, MoveSelector, Pos};
//!
//! let config = EngineConfig::classic();
//! let mut game = Game::new(config.validate().unwrap());
//! let mut engine = MoveSelector::new(config).unwrap();
//!
//! // Human plays X in the centre
//! game.apply_move(Pos::new(1, 1)).unwrap();
//!
//! // AI answers as O
//! let mode = GameMode::HumanVsAi { human: Mark::X };
//! let result = engine
//!     .compute_move(game.board(), mode, Difficulty::Hard, game.current())
//!     .unwrap();
//! if let Some(pos) = result.best_move {
//!     game.apply_move(pos).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Difficulty
//!
//! 1. Easy: win if possible, else block, else a random empty cell
//! 2. Medium: alpha-beta with a shallow depth limit
//! 3. Hard: alpha-beta with a deep or unlimited depth limit

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, MoveError, ParseBoardError, Pos, MAX_BOARD_SIZE};
pub use config::{ConfigError, DepthLimit, DepthTable, EngineConfig};
pub use engine::{
    Difficulty, EngineError, GameMode, MoveResult, MoveSelector, RankedMove, SearchType,
};
pub use game::{Game, GameStatus, MoveRecord};
pub use rules::RuleSet;
pub use session::SessionStats;
