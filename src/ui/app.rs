//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{mark_color, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::engine::TOP_CANDIDATES;
use crate::{ConfigError, Difficulty, EngineConfig, GameMode, GameStatus, Mark};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl TicTacToeApp {
    /// Create the app for a validated configuration
    pub fn new(
        config: EngineConfig,
        mode: GameMode,
        difficulty: Difficulty,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config, mode, difficulty)?,
            board_view: BoardView::default(),
            show_debug: true,
        })
    }

    /// Switch to one of the shipped board variants, keeping the pacing
    fn switch_variant(&mut self, preset: EngineConfig) {
        let config = preset.with_ai_vs_ai_delay(self.state.config.ai_vs_ai_delay);
        if let Err(e) = self.state.set_config(config) {
            self.state.message = Some(e.to_string());
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (R)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Board 3×3, 3 in a row").clicked() {
                        self.switch_variant(EngineConfig::classic());
                        ui.close_menu();
                    }
                    if ui.button("Board 4×4, 3 in a row").clicked() {
                        self.switch_variant(EngineConfig::large());
                        ui.close_menu();
                    }
                });

                ui.menu_button("Mode", |ui| {
                    for mode in [GameMode::HumanVsAi { human: Mark::X }, GameMode::AiVsAi] {
                        if ui.radio(self.state.mode == mode, mode.to_string()).clicked() {
                            self.state.set_mode(mode);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in Difficulty::ALL {
                        if ui
                            .radio(self.state.difficulty == difficulty, difficulty.to_string())
                            .clicked()
                        {
                            self.state.set_difficulty(difficulty);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = &self.state.config;
                    ui.label(format!(
                        "{} - {} - {}×{}, {} in a row",
                        self.state.mode,
                        self.state.difficulty,
                        config.board_size,
                        config.board_size,
                        config.win_length
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                    ui.add_space(10.0);
                    self.render_session_card(ui);
                }

                if self.state.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("✕○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let current = self.state.game.current();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, PANEL_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    current.symbol(),
                    egui::FontId::proportional(28.0),
                    mark_color(current),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(current.to_string()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI to move", TEXT_SECONDARY)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("⏱ TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.3 {
                    TIMER_NORMAL
                } else if secs < 1.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(result) = &self.state.last_ai_result {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", result.elapsed.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("⚡ ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let label = egui::Label::new(RichText::new("↻ New Game").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(label).clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Strategy, time, nodes and the best ranked candidates of the last AI move
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("🔧 AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(RichText::new(result.search_type.to_string()).size(11.0).strong().color(TIMER_NORMAL));
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{}ms", result.time_ms())).size(10.0).color(TEXT_SECONDARY));
                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
            });

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("→ {} {pos}  score {}", result.mark, result.score))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }

            for (i, candidate) in result.top(TOP_CANDIDATES).iter().enumerate() {
                ui.label(
                    RichText::new(format!("{}. {}  {:+}", i + 1, candidate.pos, candidate.score))
                        .size(10.0)
                        .monospace()
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_session_card(&self, ui: &mut egui::Ui) {
        let stats = &self.state.stats;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("📊 SESSION").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let row = |ui: &mut egui::Ui, label: &str, value: String| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(10.0).color(TEXT_MUTED));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(value).size(10.0).color(TEXT_SECONDARY));
                    });
                });
            };
            let ms = |d: Option<std::time::Duration>| {
                d.map_or_else(|| "-".to_string(), |d| format!("{}ms", d.as_millis()))
            };

            row(ui, "Moves", stats.total_moves().to_string());
            row(ui, "AI min", ms(stats.ai_time_min()));
            row(ui, "AI max", ms(stats.ai_time_max()));
            row(ui, "AI avg", ms(stats.ai_time_avg()));
            row(ui, "Total nodes", stats.total_nodes().to_string());
            row(ui, "Game time", format!("{:.1}s", stats.game_duration().as_secs_f32()));
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (headline, accent) = match self.state.game.status() {
            GameStatus::Won { winner, .. } => (format!("{winner} WINS!"), mark_color(*winner)),
            _ => ("DRAW".to_string(), TEXT_PRIMARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(22.0).strong().color(accent));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new("🔄 Play again (R)").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = match self.state.game.status() {
                GameStatus::Won { line, .. } => Some(line.clone()),
                _ => None,
            };
            let accepts_input = self.state.is_human_turn()
                && !self.state.is_ai_thinking()
                && !self.state.is_game_over();

            ui.vertical_centered(|ui| {
                let clicked = self.board_view.show(
                    ui,
                    self.state.game.board(),
                    self.state.game.current(),
                    self.state.game.last_move().map(|m| m.pos),
                    winning_line.as_deref(),
                    accepts_input,
                );

                if let Some(pos) = clicked {
                    if let Err(msg) = self.state.try_place_mark(pos) {
                        self.state.message = Some(msg);
                    }
                }
            });
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // R - Play again
            if i.key_pressed(egui::Key::R) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || self.state.has_stale_worker() {
            ctx.request_repaint();
        } else if let Some(wait) = self.state.ai_move_delay_remaining() {
            ctx.request_repaint_after(wait);
        } else if !self.state.is_game_over() {
            // Keep the move timer ticking
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
