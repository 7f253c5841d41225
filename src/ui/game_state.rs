//! Game state management for the tic-tac-toe GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::{
    ConfigError, Difficulty, EngineConfig, EngineError, Game, GameMode, MoveResult, MoveSelector,
    Pos, SessionStats,
};

type AiReply = (MoveSelector, Result<MoveResult, EngineError>);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub config: EngineConfig,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub stats: SessionStats,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,

    /// Lent to the worker thread while the AI is thinking
    engine: Option<MoveSelector>,
    /// Worker whose reply was abandoned by a reset; it still holds the engine
    stale_worker: Option<Receiver<AiReply>>,
    /// Earliest time the next AI-vs-AI move may start
    next_ai_move_at: Option<Instant>,
}

impl GameState {
    pub fn new(
        config: EngineConfig,
        mode: GameMode,
        difficulty: Difficulty,
    ) -> Result<Self, ConfigError> {
        let rules = config.validate()?;
        let engine = MoveSelector::new(config)?;
        info!(
            size = config.board_size,
            win_length = config.win_length,
            %mode,
            %difficulty,
            "new game"
        );
        Ok(Self {
            game: Game::new(rules),
            config,
            mode,
            difficulty,
            stats: SessionStats::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            engine: Some(engine),
            stale_worker: None,
            next_ai_move_at: None,
        })
    }

    /// Empty board, fresh statistics. A pending AI reply is discarded.
    pub fn reset(&mut self) {
        self.stats.reset();
        self.game.reset();
        self.reset_turn_state();
    }

    /// Switch board variant and start over
    pub fn set_config(&mut self, config: EngineConfig) -> Result<(), ConfigError> {
        let rules = config.validate()?;
        self.engine = Some(MoveSelector::new(config)?);
        self.config = config;
        self.stats.reset();
        self.game = Game::new(rules);
        self.reset_turn_state();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    fn reset_turn_state(&mut self) {
        let previous = std::mem::replace(&mut self.ai_state, AiState::Idle);
        if let AiState::Thinking { receiver, .. } = previous {
            debug!("abandoning AI search in progress");
            self.stale_worker = Some(receiver);
        }
        self.last_ai_result = None;
        self.move_timer = MoveTimer::default();
        self.message = None;
        self.next_ai_move_at = None;
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_ai_turn()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode.is_ai_turn(self.game.current())
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// An abandoned search is still running and no new one may start
    pub fn has_stale_worker(&self) -> bool {
        self.stale_worker.is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }

    /// Time left before the next AI-vs-AI move may start
    pub fn ai_move_delay_remaining(&self) -> Option<Duration> {
        self.next_ai_move_at
            .map(|at| at.saturating_duration_since(Instant::now()))
            .filter(|d| !d.is_zero())
    }

    /// Attempt a human move at the given position
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let mark = self.game.current();
        self.game.apply_move(pos).map_err(|e| e.to_string())?;
        info!(%pos, %mark, "human move");
        self.stats.record_move();
        self.after_move();
        Ok(())
    }

    fn after_move(&mut self) {
        self.move_timer.stop();
        self.message = None;

        if self.is_game_over() {
            self.stats.finish();
            return;
        }

        self.move_timer.start();
        if self.mode == GameMode::AiVsAi {
            self.next_ai_move_at = Some(Instant::now() + self.config.ai_vs_ai_delay);
        }
    }

    /// Hand the engine to a worker thread if the AI is to move
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }
        if self.has_stale_worker() {
            return;
        }
        if self.ai_move_delay_remaining().is_some() {
            return;
        }

        let mut engine = match self.engine.take() {
            Some(engine) => engine,
            // Lost with a worker that died; the config was validated already
            None => match MoveSelector::new(self.config) {
                Ok(engine) => engine,
                Err(e) => {
                    self.message = Some(e.to_string());
                    return;
                }
            },
        };

        let board = self.game.board().clone();
        let current = self.game.current();
        let mode = self.mode;
        let difficulty = self.difficulty;

        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = engine.compute_move(&board, mode, difficulty, current);
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Take the engine back from an abandoned worker, dropping its result
    fn collect_stale_worker(&mut self) {
        let Some(receiver) = &self.stale_worker else {
            return;
        };
        match receiver.try_recv() {
            Ok((engine, _)) => {
                // A variant switch may already have installed a new engine
                if self.engine.is_none() {
                    self.engine = Some(engine);
                }
                self.stale_worker = None;
                debug!("abandoned AI search collected");
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => self.stale_worker = None,
        }
    }

    /// Apply the AI move once the worker has replied
    pub fn check_ai_result(&mut self) {
        self.collect_stale_worker();

        let reply = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(reply) => reply,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        let (engine, result) = reply;
        self.engine = Some(engine);
        self.ai_state = AiState::Idle;

        let move_result = match result {
            Ok(move_result) => move_result,
            Err(e) => {
                warn!(error = %e, "AI could not move");
                self.message = Some(e.to_string());
                return;
            }
        };

        self.stats.record_ai_move(&move_result);
        let best_move = move_result.best_move;
        self.last_ai_result = Some(move_result);

        match best_move {
            Some(pos) => match self.game.apply_move(pos) {
                Ok(_) => self.after_move(),
                Err(e) => self.message = Some(format!("AI move rejected: {e}")),
            },
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Mark};

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
            state.check_ai_result();
        }
    }

    fn human_vs_ai(difficulty: Difficulty) -> GameState {
        GameState::new(
            EngineConfig::classic(),
            GameMode::HumanVsAi { human: Mark::X },
            difficulty,
        )
        .unwrap()
    }

    #[test]
    fn test_human_then_ai_move() {
        let mut state = human_vs_ai(Difficulty::Hard);
        assert!(state.is_human_turn());
        state.try_place_mark(Pos::new(1, 1)).unwrap();
        assert!(state.is_ai_turn());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.game.history().len(), 2);
        assert_eq!(state.stats.total_moves(), 2);
        assert_eq!(state.stats.ai_moves(), 1);
        assert!(state.last_ai_result.is_some());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_human_move_rejected_on_ai_turn() {
        let mut state = human_vs_ai(Difficulty::Easy);
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        assert!(state.try_place_mark(Pos::new(0, 1)).is_err());
        assert_eq!(state.game.history().len(), 1);
    }

    #[test]
    fn test_occupied_cell_reports_message() {
        let mut state = human_vs_ai(Difficulty::Easy);
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        let err = state.try_place_mark(Pos::new(0, 0)).unwrap_err();
        assert!(err.contains("occupied"));
    }

    #[test]
    fn test_ai_vs_ai_plays_to_a_draw() {
        let config = EngineConfig::classic().with_ai_vs_ai_delay(Duration::ZERO);
        let mut state = GameState::new(config, GameMode::AiVsAi, Difficulty::Hard).unwrap();
        for _ in 0..9 {
            state.start_ai_thinking();
            wait_for_ai(&mut state);
        }
        assert_eq!(state.game.status(), &GameStatus::Draw);
        assert_eq!(state.stats.ai_moves(), 9);
    }

    #[test]
    fn test_ai_vs_ai_waits_for_delay() {
        let config = EngineConfig::classic().with_ai_vs_ai_delay(Duration::from_secs(60));
        let mut state = GameState::new(config, GameMode::AiVsAi, Difficulty::Easy).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.game.history().len(), 1);

        state.start_ai_thinking();
        assert!(!state.is_ai_thinking());
        assert!(state.ai_move_delay_remaining().is_some());
    }

    #[test]
    fn test_reset_waits_for_abandoned_search() {
        let config = EngineConfig::classic().with_ai_vs_ai_delay(Duration::ZERO);
        let mut state = GameState::new(config, GameMode::AiVsAi, Difficulty::Hard).unwrap();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        state.reset();
        assert!(!state.is_ai_thinking());
        assert!(state.has_stale_worker());
        assert!(state.engine.is_none());

        // The old worker still owns the engine
        state.start_ai_thinking();
        assert!(!state.is_ai_thinking());

        let deadline = Instant::now() + Duration::from_secs(10);
        while state.has_stale_worker() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
            state.check_ai_result();
        }
        assert!(!state.has_stale_worker());
        assert!(state.engine.is_some());
        // The abandoned reply is not applied
        assert!(state.game.history().is_empty());
        assert!(state.last_ai_result.is_none());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);
        assert_eq!(state.game.history().len(), 1);
    }

    #[test]
    fn test_variant_switch_keeps_new_engine_after_abandoned_search() {
        let config = EngineConfig::classic().with_ai_vs_ai_delay(Duration::ZERO);
        let mut state = GameState::new(config, GameMode::AiVsAi, Difficulty::Easy).unwrap();
        state.start_ai_thinking();
        state
            .set_config(EngineConfig::large().with_ai_vs_ai_delay(Duration::ZERO))
            .unwrap();
        assert!(state.has_stale_worker());

        let deadline = Instant::now() + Duration::from_secs(10);
        while state.has_stale_worker() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
            state.check_ai_result();
        }
        assert_eq!(state.engine.as_ref().map(|e| e.rules().board_size()), Some(4));
    }

    #[test]
    fn test_set_config_switches_variant() {
        let mut state = human_vs_ai(Difficulty::Medium);
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        state.set_config(EngineConfig::large()).unwrap();
        assert_eq!(state.game.board().size(), 4);
        assert!(state.game.history().is_empty());

        let bad = EngineConfig::large().with_depths(crate::DepthTable::CLASSIC);
        assert!(state.set_config(bad).is_err());
        assert_eq!(state.game.board().size(), 4);
    }
}
