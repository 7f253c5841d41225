//! Board structure with fixed edge length and row-major cell storage

use std::fmt;
use std::str::FromStr;

use super::{Cell, Mark, MoveError, Pos, MAX_BOARD_SIZE};

/// Square game board.
///
/// The edge length is fixed at construction. Cells are only ever written one
/// at a time, either through the checked [`Board::try_place`] used for real
/// moves, or through [`Board::place`] / [`Board::clear`] pairs used by the
/// search to simulate and undo moves on a private copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. `size` must be within `1..=MAX_BOARD_SIZE`;
    /// [`crate::RuleSet::new`] is the validated entry point.
    pub fn new(size: usize) -> Self {
        debug_assert!((1..=MAX_BOARD_SIZE).contains(&size));
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        debug_assert!(self.contains(pos));
        self.cells[pos.to_index(self.size)]
    }

    /// Get cell at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_signed(&self, row: i32, col: i32) -> Option<Cell> {
        let size = self.size as i32;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some(self.cells[row as usize * self.size + col as usize])
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Write a mark without validation (search only)
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.is_empty(pos));
        self.cells[pos.to_index(self.size)] = Cell::Mark(mark);
    }

    /// Reset a cell to empty (search undo)
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.to_index(self.size)] = Cell::Empty;
    }

    /// Place a mark on an empty in-bounds cell, or reject the write.
    pub fn try_place(&mut self, pos: Pos, mark: Mark) -> Result<(), MoveError> {
        if !self.contains(pos) {
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.place(pos, mark);
        Ok(())
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Pos::from_index(idx, self.size))
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Mark(mark))
            .count()
    }

    /// All cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Error parsing the `XX./.O./...` text format
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("board has no rows")]
    Empty,
    #[display("board is {rows} rows tall but row {row} has {len} cells")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[display("board edge {_0} exceeds the maximum of {}", MAX_BOARD_SIZE)]
    TooLarge(#[error(not(source))] usize),
    #[display("unexpected character {_0:?}")]
    InvalidChar(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Rows are separated by `/` or newlines; `X` and `O` are marks, `.`,
    /// `-` and `_` are empty cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }
        let size = rows.len();
        if size > MAX_BOARD_SIZE {
            return Err(ParseBoardError::TooLarge(size));
        }

        let mut board = Board::new(size);
        for (r, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != size {
                return Err(ParseBoardError::NotSquare { rows: size, row: r, len });
            }
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'X' | 'x' => Cell::Mark(Mark::X),
                    'O' | 'o' => Cell::Mark(Mark::O),
                    '.' | '-' | '_' => Cell::Empty,
                    other => return Err(ParseBoardError::InvalidChar(other)),
                };
                board.cells[r * size + c] = cell;
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Mark(mark) => mark.symbol(),
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
