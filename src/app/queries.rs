use super::*;
use crate::model::TestResult;
use crate::view_models::{TestRow, TestRowStatus};

impl QuizApp {
    pub fn find_test(&self, test_id: u32) -> Option<&TestDefinition> {
        self.tests.iter().find(|t| t.id == test_id)
    }

    pub fn current_test(&self) -> Option<&TestDefinition> {
        self.current_test_id.and_then(|id| self.find_test(id))
    }

    pub fn current_result(&self) -> Option<TestResult> {
        self.store.get_result(self.current_test_id?)
    }

    /// Filas de la tabla precomputadas, en orden de catálogo
    pub fn test_rows(&self) -> Vec<TestRow> {
        self.tests
            .iter()
            .map(|test| {
                let (status, score_label) = if self.store.is_fully_complete(test.id) {
                    let label = self
                        .store
                        .get_result(test.id)
                        .map(|r| format!("{}/{}", r.score, r.total_blanks))
                        .unwrap_or_else(|| "-".into());
                    (TestRowStatus::Completed, label)
                } else if self.store.is_partially_complete(test.id) {
                    (TestRowStatus::InProgress, "-".into())
                } else {
                    (TestRowStatus::NotTaken, "Sin empezar".into())
                };
                TestRow {
                    id: test.id,
                    name: test.name.clone(),
                    status,
                    score_label,
                }
            })
            .collect()
    }

    pub fn has_nonempty_input(&self) -> bool {
        self.inputs.iter().any(|s| !s.is_empty())
    }

    /// El botón de entrega parcial solo aparece si el test ya está a medias
    /// o hay algo escrito que guardar.
    pub fn show_partial_button(&self) -> bool {
        let already_partial = self
            .current_test_id
            .is_some_and(|id| self.store.is_partially_complete(id));
        already_partial || self.has_nonempty_input()
    }
}
