mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTONES SUPERIORES (solo visibles durante el quiz y el resumen)
        if matches!(self.state, AppState::Quiz | AppState::Summary) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones de views
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary_view(self, ctx),
        }
    }
}
