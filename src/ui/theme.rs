//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(44, 47, 54);
pub const GRID_LINE: Color32 = Color32::from_rgb(150, 155, 165);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(90, 170, 255);
pub const O_MARK: Color32 = Color32::from_rgb(255, 140, 90);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 24)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

pub fn win_cell_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(50, 220, 50, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const MARK_SIZE_RATIO: f32 = 0.32;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
