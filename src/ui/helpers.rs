// src/ui/helpers.rs
use egui::{Color32, RichText, Ui};

use crate::model::AttemptStatus;

/// Color de cada estado, el mismo código visual en test y revisión:
/// verde acierto, cian parcial, rojo fallo, gris revelado.
pub fn status_color(status: AttemptStatus) -> Color32 {
    match status {
        AttemptStatus::Correct => Color32::LIGHT_GREEN,
        AttemptStatus::Partial => Color32::LIGHT_BLUE,
        AttemptStatus::Incorrect => Color32::LIGHT_RED,
        AttemptStatus::Revealed => Color32::GRAY,
    }
}

/// Hueco congelado: texto coloreado según su estado, ya no editable.
pub fn frozen_blank(ui: &mut Ui, status: AttemptStatus, text: &str) {
    let shown = if text.is_empty() { "___" } else { text };
    let mut rich = RichText::new(shown).color(status_color(status)).strong();
    if status == AttemptStatus::Revealed {
        rich = rich.strikethrough();
    }
    ui.label(rich);
}
