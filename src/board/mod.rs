//! Board representation for N×N alignment games

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, ParseBoardError};

/// Largest supported board edge. Positions are stored as `u8` pairs.
pub const MAX_BOARD_SIZE: usize = 16;

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the other mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used in the text board format
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Content of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Mark),
}

impl Cell {
    /// The mark occupying this cell, if any
    #[inline]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Mark(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Mark(mark)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board with the given edge length
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }
}

/// Rejected move application. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("position {_0} is outside the board")]
    OutOfBounds(#[error(not(source))] Pos),
    #[display("position {_0} is already occupied")]
    Occupied(#[error(not(source))] Pos),
    #[display("the game is already over")]
    GameOver,
}
