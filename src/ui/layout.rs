use egui::{Context, Ui, Visuals};

use crate::QuizApp;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("📋 Volver al listado").clicked() {
                app.volver_a_la_tabla();
            }

            // Reiniciar solo tiene sentido con algo que borrar
            let has_progress = app
                .current_test_id
                .is_some_and(|id| !app.store.is_untouched(id));
            if has_progress && ui.button("🔄 Borrar progreso del test").clicked() {
                app.confirm_reset = true;
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Título común de las vistas de test: "(id) nombre"
pub fn test_heading(ui: &mut Ui, app: &QuizApp) {
    if let Some(test) = app.current_test() {
        ui.heading(format!("({}) {}", test.id, test.name));
        ui.add_space(10.0);
    }
}

/// Aviso amarillo reutilizado por varias vistas
pub fn message_label(ui: &mut Ui, message: &str) {
    if !message.is_empty() {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(message)
                .color(egui::Color32::YELLOW)
                .strong(),
        );
        ui.add_space(8.0);
    }
}
