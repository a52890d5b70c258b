use egui::{Align, Button, CentralPanel, Context, RichText};

use crate::QuizApp;
use crate::ui::layout::message_label;
use crate::view_models::TestRowStatus;

pub fn ui_table(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 32.0;

        // Altura estimada para centrar
        let rows_count = app.tests.len() as f32;
        let estimated_h = 100.0 + (button_h + 8.0) * (rows_count + 1.0);
        let vertical_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vertical_space / 2.0);

        // Precomputar las filas para no mantener el borrow en la iteración
        let rows = app.test_rows();

        ui.vertical_centered_justified(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading("📚 Tests de rellenar huecos");
                        ui.add_space(20.0);

                        message_label(ui, &app.message.clone());

                        egui::Grid::new("tests_grid")
                            .num_columns(4)
                            .spacing([24.0, 8.0])
                            .striped(true)
                            .show(ui, |ui| {
                                ui.label(RichText::new("Id").strong());
                                ui.label(RichText::new("Test").strong());
                                ui.label(RichText::new("Puntuación").strong());
                                ui.label("");
                                ui.end_row();

                                for row in &rows {
                                    ui.label(row.id.to_string());
                                    ui.label(&row.name);
                                    ui.label(&row.score_label);

                                    let button = ui.add_sized(
                                        [140.0, button_h],
                                        Button::new(row.action_label()),
                                    );
                                    if button.clicked() {
                                        let review = row.status == TestRowStatus::Completed;
                                        app.open_test(row.id, review);
                                    }
                                    ui.end_row();
                                }
                            });
                    });
                });
        });

        ui.add_space(vertical_space / 2.0);
    });
}
