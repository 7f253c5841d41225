//! Win condition checking for K-in-a-row on an N×N board
//!
//! A mark wins when some window of exactly K consecutive cells along a row,
//! column, main diagonal or anti-diagonal holds only that mark. Windows are
//! slid along every line, so K smaller than N (3-in-a-row on 4×4) is handled
//! the same way as the full-line case.

use crate::board::{Board, Cell, Mark, Pos};

/// Direction vectors for line checking, in scan order
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Row
    (1, 0),  // Column
    (1, 1),  // Main diagonal
    (1, -1), // Anti-diagonal
];

/// Check if `mark` owns any full window of `win_length` cells
#[inline]
pub fn has_winning_line(board: &Board, mark: Mark, win_length: usize) -> bool {
    first_window(board, mark, win_length).is_some()
}

/// Find the cells of the first winning window for `mark`.
///
/// Families are scanned rows, then columns, then main diagonals, then
/// anti-diagonals; within a family, window starts are scanned row-major.
pub fn find_winning_line(board: &Board, mark: Mark, win_length: usize) -> Option<Vec<Pos>> {
    let (start, (dr, dc)) = first_window(board, mark, win_length)?;
    let line = (0..win_length as i32)
        .map(|i| {
            Pos::new(
                (start.row as i32 + dr * i) as u8,
                (start.col as i32 + dc * i) as u8,
            )
        })
        .collect();
    Some(line)
}

/// Mark holding a winning window, checking X before O
pub fn check_winner(board: &Board, win_length: usize) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_winning_line(board, mark, win_length))
}

fn first_window(board: &Board, mark: Mark, win_length: usize) -> Option<(Pos, (i32, i32))> {
    if win_length == 0 {
        return None;
    }
    let size = board.size() as i32;
    let span = win_length as i32 - 1;

    for (dr, dc) in DIRECTIONS {
        for row in 0..size {
            for col in 0..size {
                let end_row = row + dr * span;
                let end_col = col + dc * span;
                if end_row < 0 || end_row >= size || end_col < 0 || end_col >= size {
                    continue;
                }
                if window_matches(board, mark, row, col, (dr, dc), win_length) {
                    return Some((Pos::new(row as u8, col as u8), (dr, dc)));
                }
            }
        }
    }
    None
}

#[inline]
fn window_matches(
    board: &Board,
    mark: Mark,
    row: i32,
    col: i32,
    (dr, dc): (i32, i32),
    win_length: usize,
) -> bool {
    (0..win_length as i32)
        .all(|i| board.get_signed(row + dr * i, col + dc * i) == Some(Cell::Mark(mark)))
}
