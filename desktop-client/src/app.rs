use eframe::egui;
use engine::config::ConfigStore;
use engine::game_state::GameState;
use engine::search::best_move;
use engine::types::Outcome;

use crate::board_view::BoardView;
use crate::config::Config;

pub struct TicTacToeApp {
    game: GameState,
    board_view: BoardView,
    config: Config,
    config_store: ConfigStore<Config>,
}

impl TicTacToeApp {
    pub fn new(config: Config, config_store: ConfigStore<Config>) -> Self {
        Self {
            game: GameState::new(),
            board_view: BoardView::new(),
            config,
            config_store,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (restart, toggle_ai, swap_ai_mark) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::A),
                i.key_pressed(egui::Key::Tab),
            )
        });

        if restart {
            self.game.restart();
            engine::log!("Game restarted");
        }

        if toggle_ai {
            self.config.ai_enabled = !self.config.ai_enabled;
            self.game.restart();
            engine::log!(
                "Computer opponent {}",
                if self.config.ai_enabled { "enabled" } else { "disabled" }
            );
            self.save_settings();
        }

        if swap_ai_mark {
            self.config.ai_mark = self.config.ai_mark.opponent();
            self.game.restart();
            engine::log!("Computer now plays {}", self.config.ai_mark.symbol());
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.config_store.save(&self.config) {
            engine::log!("Failed to save settings: {}", e);
        }
    }

    fn is_computer_turn(&self) -> bool {
        self.config.ai_enabled
            && self.game.outcome == Outcome::Ongoing
            && self.game.current_mark == self.config.ai_mark
    }

    /// Runs the search and applies its move. Synchronous: the full
    /// 3x3 game tree is small enough to explore within a frame.
    fn play_computer_turn(&mut self) {
        let mark = self.config.ai_mark;
        if let Some(pos) = best_move(&self.game.board, mark) {
            match self.game.place_mark(pos) {
                Ok(()) => {
                    engine::log!("Computer places {} at ({}, {})", mark.symbol(), pos.row, pos.col)
                }
                Err(e) => engine::log!("Computer move rejected: {}", e),
            }
        }
    }

    fn status_message(&self) -> String {
        match self.game.outcome {
            Outcome::Ongoing => format!("Turn: {}", self.game.current_mark.symbol()),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::Win(mark) => format!("'{}' wins!", mark.symbol()),
        }
    }

    fn status_hint(&self) -> String {
        let mut hint =
            "Left click to place \u{2022} R restart \u{2022} A toggle computer \u{2022} Tab swap computer mark"
                .to_string();
        if self.config.ai_enabled {
            hint.push_str(&format!(" \u{2022} Computer: {}", self.config.ai_mark.symbol()));
        }
        hint
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        if self.is_computer_turn() {
            self.play_computer_turn();
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(self.status_message());
            ui.label(egui::RichText::new(self.status_hint()).weak());
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let interactive = self.game.outcome == Outcome::Ongoing && !self.is_computer_turn();

            if let Some(pos) = self.board_view.show(ui, &self.game, interactive) {
                match self.game.place_mark(pos) {
                    Ok(()) => {
                        // The computer answers on the next frame.
                        if self.is_computer_turn() {
                            ctx.request_repaint();
                        }
                    }
                    Err(e) => engine::log!("Move rejected: {}", e),
                }
            }
        });
    }
}
