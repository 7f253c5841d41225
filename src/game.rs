//! Game controller: board, turn, status and move history
//!
//! X always moves first. After every accepted move the controller checks the
//! mover for a completed line, then the board for fullness, and only then
//! hands the turn to the other mark.

use tracing::{debug, info};

use crate::board::{Board, Mark, MoveError, Pos};
use crate::rules::RuleSet;

/// Outcome state of a game
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// `line` holds the first completed window, in scan order
    Won { winner: Mark, line: Vec<Pos> },
    Draw,
}

impl GameStatus {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        !self.is_in_progress()
    }
}

/// One accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub mark: Mark,
}

/// A single game on one rule set
#[derive(Debug, Clone)]
pub struct Game {
    rules: RuleSet,
    board: Board,
    current: Mark,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            board: rules.new_board(),
            current: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move. After the game ends this is the last mover.
    #[inline]
    pub fn current(&self) -> Mark {
        self.current
    }

    #[inline]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// Play `pos` for the side to move.
    ///
    /// Rejected moves leave the game untouched.
    pub fn apply_move(&mut self, pos: Pos) -> Result<&GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let mark = self.current;
        self.board.try_place(pos, mark)?;
        self.history.push(MoveRecord { pos, mark });
        debug!(%pos, %mark, move_number = self.history.len(), "move applied");

        if let Some(line) = self.rules.winning_line(&self.board, mark) {
            info!(winner = %mark, moves = self.history.len(), "game won");
            self.status = GameStatus::Won { winner: mark, line };
        } else if self.rules.is_draw(&self.board) {
            info!(moves = self.history.len(), "game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current = mark.opponent();
        }
        Ok(&self.status)
    }

    /// Empty board, X to move
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "game reset");
        self.board = self.rules.new_board();
        self.current = Mark::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Game {
        Game::new(RuleSet::new(3, 3).unwrap())
    }

    fn play(game: &mut Game, moves: &[(u8, u8)]) {
        for &(row, col) in moves {
            game.apply_move(Pos::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut game = classic();
        assert_eq!(game.current(), Mark::X);
        play(&mut game, &[(0, 0)]);
        assert_eq!(game.current(), Mark::O);
        assert_eq!(game.board().get(Pos::new(0, 0)).mark(), Some(Mark::X));
        play(&mut game, &[(1, 1)]);
        assert_eq!(game.current(), Mark::X);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_win_detected_with_line() {
        let mut game = classic();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(
            game.status(),
            &GameStatus::Won {
                winner: Mark::X,
                line: vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)],
            }
        );
        assert_eq!(game.current(), Mark::X);
        assert_eq!(game.status().winner(), Some(Mark::X));
    }

    #[test]
    fn test_draw_detected() {
        let mut game = classic();
        // X O X / X O O / O X X
        play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(game.status(), &GameStatus::Draw);
        assert!(game.is_over());
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let mut game = classic();
        // Final X at (2,2) fills the board and completes the diagonal
        play(
            &mut game,
            &[(0, 0), (0, 1), (1, 1), (0, 2), (1, 2), (1, 0), (2, 0), (2, 1), (2, 2)],
        );
        assert_eq!(game.status().winner(), Some(Mark::X));
    }

    #[test]
    fn test_rejected_moves_leave_game_untouched() {
        let mut game = classic();
        play(&mut game, &[(1, 1)]);
        assert_eq!(
            game.apply_move(Pos::new(1, 1)),
            Err(MoveError::Occupied(Pos::new(1, 1)))
        );
        assert_eq!(
            game.apply_move(Pos::new(3, 0)),
            Err(MoveError::OutOfBounds(Pos::new(3, 0)))
        );
        assert_eq!(game.current(), Mark::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = classic();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.apply_move(Pos::new(2, 2)), Err(MoveError::GameOver));
        assert!(game.board().is_empty(Pos::new(2, 2)));
    }

    #[test]
    fn test_reset() {
        let mut game = classic();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        game.reset();
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert_eq!(game.current(), Mark::X);
        assert!(game.history().is_empty());
        assert_eq!(game.board().empty_count(), 9);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_large_board_three_in_row() {
        let mut game = Game::new(RuleSet::new(4, 3).unwrap());
        play(&mut game, &[(1, 1), (0, 0), (2, 2), (0, 1), (3, 3)]);
        assert_eq!(game.status().winner(), Some(Mark::X));
        assert_eq!(game.last_move().map(|m| m.mark), Some(Mark::X));
    }
}
