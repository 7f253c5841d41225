//! Per-game session statistics
//!
//! Created fresh for every game and owned by whatever drives the moves (the
//! GUI app or the self-play loop). AI moves feed it their [`MoveResult`].

use std::time::{Duration, Instant};

use tracing::info;

use crate::engine::MoveResult;

#[derive(Debug, Clone)]
pub struct SessionStats {
    started: Instant,
    finished: Option<Duration>,
    total_moves: u32,
    ai_moves: u32,
    ai_time_total: Duration,
    ai_time_min: Option<Duration>,
    ai_time_max: Duration,
    total_nodes: u64,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            finished: None,
            total_moves: 0,
            ai_moves: 0,
            ai_time_total: Duration::ZERO,
            ai_time_min: None,
            ai_time_max: Duration::ZERO,
            total_nodes: 0,
        }
    }

    /// Count a human move
    pub fn record_move(&mut self) {
        self.total_moves += 1;
    }

    /// Count an AI move and fold in its timing and node count
    pub fn record_ai_move(&mut self, result: &MoveResult) {
        self.total_moves += 1;
        self.ai_moves += 1;
        self.ai_time_total += result.elapsed;
        self.ai_time_max = self.ai_time_max.max(result.elapsed);
        self.ai_time_min = Some(match self.ai_time_min {
            Some(min) => min.min(result.elapsed),
            None => result.elapsed,
        });
        self.total_nodes += result.nodes;
    }

    /// Freeze the game clock. Later calls keep the first value.
    pub fn finish(&mut self) {
        if self.finished.is_none() {
            self.finished = Some(self.started.elapsed());
        }
    }

    #[inline]
    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    #[inline]
    pub fn ai_moves(&self) -> u32 {
        self.ai_moves
    }

    #[inline]
    pub fn total_nodes(&self) -> u64 {
        self.total_nodes
    }

    pub fn ai_time_min(&self) -> Option<Duration> {
        self.ai_time_min
    }

    pub fn ai_time_max(&self) -> Option<Duration> {
        (self.ai_moves > 0).then_some(self.ai_time_max)
    }

    pub fn ai_time_avg(&self) -> Option<Duration> {
        (self.ai_moves > 0).then(|| self.ai_time_total / self.ai_moves)
    }

    pub fn avg_nodes(&self) -> Option<u64> {
        (self.ai_moves > 0).then(|| self.total_nodes / u64::from(self.ai_moves))
    }

    /// Wall time since the game started, frozen once finished
    pub fn game_duration(&self) -> Duration {
        self.finished.unwrap_or_else(|| self.started.elapsed())
    }

    pub fn log_summary(&self) {
        info!(
            total_moves = self.total_moves,
            ai_moves = self.ai_moves,
            game_ms = self.game_duration().as_millis() as u64,
            "session summary"
        );
        if let (Some(min), Some(max), Some(avg)) =
            (self.ai_time_min(), self.ai_time_max(), self.ai_time_avg())
        {
            info!(
                min_ms = min.as_millis() as u64,
                max_ms = max.as_millis() as u64,
                avg_ms = avg.as_millis() as u64,
                total_nodes = self.total_nodes,
                avg_nodes = self.avg_nodes().unwrap_or(0),
                "AI timing"
            );
        }
    }

    /// Log the finished session and start a new one
    pub fn reset(&mut self) {
        self.log_summary();
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Mark, Pos};
    use crate::config::DepthLimit;
    use crate::engine::SearchType;

    fn result(ms: u64, nodes: u64) -> MoveResult {
        MoveResult {
            best_move: Some(Pos::new(0, 0)),
            score: 0,
            mark: Mark::O,
            search_type: SearchType::AlphaBeta(DepthLimit::Unlimited),
            elapsed: Duration::from_millis(ms),
            nodes,
            ranked: Vec::new(),
        }
    }

    #[test]
    fn test_empty_session() {
        let stats = SessionStats::new();
        assert_eq!(stats.total_moves(), 0);
        assert_eq!(stats.ai_time_min(), None);
        assert_eq!(stats.ai_time_max(), None);
        assert_eq!(stats.ai_time_avg(), None);
        assert_eq!(stats.avg_nodes(), None);
    }

    #[test]
    fn test_ai_moves_aggregate() {
        let mut stats = SessionStats::new();
        stats.record_move();
        stats.record_ai_move(&result(30, 100));
        stats.record_move();
        stats.record_ai_move(&result(10, 300));
        stats.record_ai_move(&result(20, 200));

        assert_eq!(stats.total_moves(), 5);
        assert_eq!(stats.ai_moves(), 3);
        assert_eq!(stats.ai_time_min(), Some(Duration::from_millis(10)));
        assert_eq!(stats.ai_time_max(), Some(Duration::from_millis(30)));
        assert_eq!(stats.ai_time_avg(), Some(Duration::from_millis(20)));
        assert_eq!(stats.total_nodes(), 600);
        assert_eq!(stats.avg_nodes(), Some(200));
    }

    #[test]
    fn test_finish_freezes_clock() {
        let mut stats = SessionStats::new();
        stats.finish();
        let frozen = stats.game_duration();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(stats.game_duration(), frozen);
        stats.finish();
        assert_eq!(stats.game_duration(), frozen);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut stats = SessionStats::new();
        stats.record_ai_move(&result(5, 50));
        stats.finish();
        stats.reset();
        assert_eq!(stats.total_moves(), 0);
        assert_eq!(stats.total_nodes(), 0);
        assert_eq!(stats.ai_time_min(), None);
    }
}
