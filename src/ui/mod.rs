mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE VOLVER Y REINICIAR (solo dentro de un test)
        if matches!(self.state, AppState::TestView | AppState::Review) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones de views
        match self.state {
            AppState::TableView => views::table::ui_table(self, ctx),
            AppState::TestView => views::test::ui_test(self, ctx),
            AppState::Review => views::results::ui_results(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}
