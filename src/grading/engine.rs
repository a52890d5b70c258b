use thiserror::Error;

use crate::grading::matcher::classify;
use crate::model::{AttemptLedger, AttemptRecord, AttemptStatus, ContentItem, TestDefinition, TestResult};
use crate::storage::ResultStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Entrega parcial sin ninguna respuesta escrita: se rechaza sin
    /// tocar el estado guardado.
    #[error("ningún hueco tiene respuesta escrita")]
    NoInputProvided,
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub ledger: AttemptLedger,
    /// Solo presente cuando la ronda dejó todos los huecos asentados.
    pub result: Option<TestResult>,
}

/// Ronda de entrega parcial sobre los huecos todavía editables.
///
/// `raw_inputs` trae una cadena por hueco *no bloqueado*, en orden de
/// contenido. Los huecos bloqueados se arrastran tal cual sin consumir
/// input; los vacíos quedan pendientes sin clasificar.
pub fn submit_partial(
    test: &TestDefinition,
    store: &mut ResultStore,
    raw_inputs: &[String],
) -> Result<SubmitOutcome, SubmitError> {
    if raw_inputs.iter().all(|s| s.is_empty()) {
        return Err(SubmitError::NoInputProvided);
    }

    let mut ledger = stored_or_fresh_ledger(test, store);

    let mut tally: u32 = 0;
    let mut inputs = raw_inputs.iter();

    for (index, blank) in test.blanks().enumerate() {
        if ledger.is_locked(index) {
            if ledger.status_at(index) == Some(AttemptStatus::Correct) {
                tally += 1;
            }
            continue;
        }

        let raw = inputs.next().map(String::as_str).unwrap_or("");
        if raw.is_empty() {
            // Sigue pendiente: ni clasificación ni cerrojo
            continue;
        }

        let prior = ledger.status_at(index);
        let was_eligible = ledger.scoring_eligible[index];
        let status = classify(raw, blank, prior);
        ledger.apply_classification(index, raw, status);
        if status == AttemptStatus::Correct && was_eligible {
            tally += 1;
        }
    }

    store.put_ledger(test.id, &ledger);

    let result = ledger.completed_answers().map(|answers| TestResult {
        answers,
        score: tally,
        total_blanks: test.blank_count() as u32,
        is_complete: true,
    });
    if let Some(result) = &result {
        store.put_result(test.id, result);
    }

    Ok(SubmitOutcome { ledger, result })
}

/// Entrega final: corrige lo que haya y cierra el test aunque queden
/// huecos en blanco o mal. Siempre produce y guarda un resultado completo.
pub fn submit_final(
    test: &TestDefinition,
    store: &mut ResultStore,
    raw_inputs: &[String],
) -> TestResult {
    let mut ledger = stored_or_fresh_ledger(test, store);

    let mut score: u32 = 0;
    let mut answers = Vec::with_capacity(test.blank_count());
    let mut inputs = raw_inputs.iter();

    for (index, blank) in test.blanks().enumerate() {
        // Los huecos ya asentados se arrastran sin consumir input
        if let Some(record) = ledger.answers.get(index).cloned().flatten()
            && record.status.is_settled()
        {
            if record.status == AttemptStatus::Correct {
                score += 1;
            }
            answers.push(record);
            continue;
        }

        let raw = inputs.next().cloned().unwrap_or_default();
        let prior = ledger.status_at(index);
        let was_eligible = ledger.scoring_eligible[index];
        let status = classify(&raw, blank, prior);
        ledger.apply_classification(index, &raw, status);
        if status == AttemptStatus::Correct && was_eligible {
            score += 1;
        }
        answers.push(AttemptRecord {
            user_input: raw,
            status,
        });
    }

    let result = TestResult {
        answers,
        score,
        total_blanks: test.blank_count() as u32,
        is_complete: true,
    };
    store.put_result(test.id, &result);
    result
}

/// Revela la respuesta de un hueco concreto, fuera del flujo de entregas.
/// El hueco queda bloqueado como `revealed` y sin opción a puntuar.
pub fn reveal_blank(test: &TestDefinition, store: &mut ResultStore, index: usize) -> AttemptLedger {
    let mut ledger = stored_or_fresh_ledger(test, store);

    if index < ledger.answers.len() {
        ledger.reveal(index);
        store.put_ledger(test.id, &ledger);
    }
    ledger
}

/// Libro de intentos guardado, o uno nuevo si falta o si no cuadra con el
/// número de huecos del test (datos de una versión anterior del contenido).
fn stored_or_fresh_ledger(test: &TestDefinition, store: &ResultStore) -> AttemptLedger {
    let blank_count = test.blank_count();
    store
        .get_ledger(test.id)
        .filter(|l| l.answers.len() == blank_count && l.scoring_eligible.len() == blank_count)
        .unwrap_or_else(|| AttemptLedger::new(blank_count))
}

/// Texto completo del test con las respuestas canónicas en los huecos,
/// independiente de cualquier intento.
pub fn full_text(test: &TestDefinition) -> String {
    test.content
        .items
        .iter()
        .map(|item| match item {
            ContentItem::Text { value } => value.as_str(),
            ContentItem::Missing(blank) => blank
                .official_answers
                .first()
                .map(String::as_str)
                .unwrap_or(""),
        })
        .collect()
}
