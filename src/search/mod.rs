//! Move search
//!
//! Contains:
//! - Minimax with alpha-beta pruning and a configurable depth horizon
//! - The single-ply heuristic policy behind the easy difficulty

pub mod alphabeta;
pub mod heuristic;

pub use alphabeta::{Searcher, INF};
pub use heuristic::{HeuristicPolicy, HeuristicReason};
