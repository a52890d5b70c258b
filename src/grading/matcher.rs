use crate::model::{AttemptStatus, Blank};

/// Clasifica una respuesta no vacía contra las listas de un hueco.
/// Igualdad exacta de cadenas: aquí no se recorta ni normaliza nada.
///
/// Regla de segunda oportunidad: acertar la oficial después de haber
/// fallado se muestra como acierto pero cuenta como `partial`.
pub fn classify(user_answer: &str, blank: &Blank, prior: Option<AttemptStatus>) -> AttemptStatus {
    if blank.official_answers.iter().any(|a| a == user_answer) {
        if prior == Some(AttemptStatus::Incorrect) {
            AttemptStatus::Partial
        } else {
            AttemptStatus::Correct
        }
    } else if blank.additional_answers.iter().any(|a| a == user_answer) {
        AttemptStatus::Partial
    } else {
        AttemptStatus::Incorrect
    }
}
