// src/view_models.rs

use crate::model::{AttemptLedger, AttemptStatus, TestDefinition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestRowStatus {
    NotTaken,
    InProgress,
    Completed,
}

/// Fila precomputada de la tabla de tests
#[derive(Clone, Debug)]
pub struct TestRow {
    pub id: u32,
    pub name: String,
    pub status: TestRowStatus,
    pub score_label: String,
}

impl TestRow {
    pub fn action_label(&self) -> &'static str {
        match self.status {
            TestRowStatus::Completed => "✅ Revisar",
            TestRowStatus::InProgress => "▶ Continuar",
            TestRowStatus::NotTaken => "▶ Empezar",
        }
    }
}

/// Estado de un hueco en la ronda actual: o está bloqueado con su texto
/// congelado, o espera input en la ranura `input_slot` del buffer.
///
/// Este mapa se calcula una vez por ronda a partir del libro de intentos,
/// en orden de contenido; la pantalla solo lo consume. Así el índice del
/// hueco nunca depende de qué widgets haya vivos.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlankView {
    Locked {
        status: AttemptStatus,
        text: String,
    },
    Editable {
        input_slot: usize,
        prefill: String,
        was_incorrect: bool,
    },
}

pub fn blank_views(test: &TestDefinition, ledger: Option<&AttemptLedger>) -> Vec<BlankView> {
    let mut input_slot = 0;
    test.blanks()
        .enumerate()
        .map(|(index, _)| {
            let record = ledger
                .and_then(|l| l.answers.get(index))
                .and_then(|r| r.as_ref());
            match record {
                Some(r) if r.status.is_settled() => BlankView::Locked {
                    status: r.status,
                    text: r.user_input.clone(),
                },
                other => {
                    // Un fallo previo se reedita con su texto en rojo
                    let (prefill, was_incorrect) = match other {
                        Some(r) => (r.user_input.clone(), r.status == AttemptStatus::Incorrect),
                        None => (String::new(), false),
                    };
                    let view = BlankView::Editable {
                        input_slot,
                        prefill,
                        was_incorrect,
                    };
                    input_slot += 1;
                    view
                }
            }
        })
        .collect()
}
