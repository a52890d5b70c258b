use egui::{Button, CentralPanel, Color32, Context, RichText, ScrollArea};

use crate::QuizApp;
use crate::grading::full_text;
use crate::model::{AttemptLedger, AttemptRecord, AttemptStatus, Blank, ContentItem};
use crate::ui::helpers::status_color;
use crate::ui::layout::{message_label, test_heading};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(test) = app.current_test().cloned() else {
        return;
    };
    let Some(result) = app.current_result() else {
        // Revisión sin resultado guardado: no hay nada que enseñar
        app.volver_a_la_tabla();
        return;
    };
    // El libro de intentos distingue el acierto a la segunda del parcial normal
    let ledger = app.store.get_ledger(test.id);

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 120.0 + 300.0 + 80.0 + 48.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(60, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    test_heading(ui, app);
                    ui.heading(format!(
                        "Puntuación: {} de {} correctas",
                        result.score, result.total_blanks
                    ));
                    ui.add_space(12.0);

                    ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                        ui.set_width(panel_width);
                        ui.horizontal_wrapped(|ui| {
                            let mut blank_idx = 0;
                            for item in &test.content.items {
                                match item {
                                    ContentItem::Text { value } => {
                                        ui.label(value);
                                    }
                                    ContentItem::Missing(blank) => {
                                        if let Some(record) = result.answers.get(blank_idx) {
                                            review_blank(
                                                ui,
                                                blank,
                                                record,
                                                is_second_chance(
                                                    ledger.as_ref(),
                                                    blank,
                                                    record,
                                                    blank_idx,
                                                ),
                                            );
                                        }
                                        blank_idx += 1;
                                    }
                                }
                            }
                        });
                    });

                    ui.add_space(12.0);
                    ui.separator();
                    ui.label(RichText::new("Texto completo:").strong());
                    ui.label(RichText::new(full_text(&test)).italics());
                    ui.add_space(16.0);

                    if ui
                        .add_sized([200.0, 36.0], Button::new("🔄 Reiniciar test"))
                        .clicked()
                    {
                        app.confirm_reset = true;
                    }

                    message_label(ui, &app.message.clone());
                });
            });

        ui.add_space(extra_space);
    });
}

/// Acierto a la segunda: oficial acertada con el cerrojo ya cerrado. Se
/// enseña sin la respuesta canónica entre paréntesis.
fn is_second_chance(
    ledger: Option<&AttemptLedger>,
    blank: &Blank,
    record: &AttemptRecord,
    index: usize,
) -> bool {
    ledger.is_some_and(|l| {
        l.scoring_eligible.get(index) == Some(&false)
            && blank.official_answers.iter().any(|a| *a == record.user_input)
    })
}

fn review_blank(ui: &mut egui::Ui, blank: &Blank, record: &AttemptRecord, second_chance: bool) {
    let official = blank
        .official_answers
        .first()
        .map(String::as_str)
        .unwrap_or("");
    let written = if record.user_input.is_empty() {
        "___"
    } else {
        record.user_input.as_str()
    };

    let response = match record.status {
        AttemptStatus::Correct => ui.label(
            RichText::new(written)
                .color(status_color(record.status))
                .strong(),
        ),
        AttemptStatus::Partial => {
            let response = ui.label(
                RichText::new(written)
                    .color(status_color(record.status))
                    .strong(),
            );
            if !second_chance {
                ui.label(RichText::new(format!("({official})")).color(Color32::GRAY).small());
            }
            response
        }
        AttemptStatus::Incorrect => {
            let response = ui.label(
                RichText::new(written)
                    .color(status_color(record.status))
                    .strikethrough(),
            );
            ui.label(RichText::new(official).color(Color32::LIGHT_GREEN).strong());
            if !blank.additional_answers.is_empty() {
                ui.label(
                    RichText::new(format!("[{}]", blank.additional_answers.join(", ")))
                        .color(Color32::GRAY)
                        .small(),
                );
            }
            response
        }
        AttemptStatus::Revealed => {
            let response = ui.label(
                RichText::new(written)
                    .color(status_color(record.status))
                    .strikethrough(),
            );
            ui.label(RichText::new(official).color(Color32::LIGHT_GREEN).strong());
            response
        }
    };

    if let Some(explanation) = &blank.explanation {
        response.on_hover_text(explanation);
    }
}
