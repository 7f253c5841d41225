//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Mark, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Edge length of the board being drawn
    size: usize,
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            size: 3,
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let side = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.size = board.size();
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        if let Some(line) = winning_line {
            for &pos in line {
                painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), win_cell_fill());
            }
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_pos = None;
        if accepts_input {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = board.is_empty(board_pos);
                self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);

                if response.clicked() && is_valid {
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Draw the inner grid lines between cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let extent = self.size as f32 * self.cell_size;

        for i in 1..self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, extent)],
                stroke,
            );
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(extent, offset)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for idx in 0..self.size * self.size {
            let pos = Pos::from_index(idx, self.size);
            if let Some(mark) = board.get(pos).mark() {
                self.draw_mark(painter, pos, mark, mark_color(mark));
            }
        }
    }

    /// X as two crossed strokes, O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, color: Color32) {
        let center = self.cell_center(pos);
        let half = self.cell_size * MARK_SIZE_RATIO;
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, color);

        match mark {
            Mark::X => {
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(-half, half), center + Vec2::new(half, -half)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, half, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).right_top() + Vec2::new(-10.0, 10.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Stroke through the centres of the winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark, is_valid: bool) {
        if is_valid {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), hover_valid());
            self.draw_mark(painter, pos, turn, mark_color(turn).gamma_multiply(0.35));
        } else {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), hover_invalid());
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }
        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;

        if row < self.size && col < self.size {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::splat(BOARD_MARGIN)
            + Vec2::new(pos.col as f32, pos.row as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert board position to the screen centre of its cell
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => X_MARK,
        Mark::O => O_MARK,
    }
}
