use super::*;
use crate::grading::{self, SubmitError};

impl QuizApp {
    /// Entrega parcial: corrige lo escrito y deja el resto pendiente.
    pub fn entregar_parcial(&mut self) {
        let Some(test) = self.current_test().cloned() else {
            return;
        };

        match grading::submit_partial(&test, &mut self.store, &self.inputs) {
            Ok(outcome) => {
                if outcome.result.is_some() {
                    // Todos los huecos asentados: directo a la revisión
                    self.state = AppState::Review;
                    self.message.clear();
                } else {
                    self.rebuild_round();
                    self.message =
                        "💾 Progreso guardado. Los huecos asentados ya no se editan.".into();
                }
            }
            Err(SubmitError::NoInputProvided) => {
                self.message = "⚠ Escribe al menos una respuesta antes de entregar.".into();
            }
        }
    }

    /// Entrega final: corrige todo tal cual esté y cierra el test.
    pub fn entregar_final(&mut self) {
        let Some(test) = self.current_test().cloned() else {
            return;
        };

        grading::submit_final(&test, &mut self.store, &self.inputs);
        self.state = AppState::Review;
        self.message.clear();
    }

    /// Revela la respuesta oficial del hueco `index` (índice de contenido).
    /// El hueco queda bloqueado y fuera de la puntuación.
    pub fn revelar_hueco(&mut self, index: usize) {
        let Some(test) = self.current_test().cloned() else {
            return;
        };

        grading::reveal_blank(&test, &mut self.store, index);
        self.rebuild_round();
        self.message = "👁 Respuesta revelada. Ese hueco ya no puntúa.".into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttemptStatus, Blank, ContentItem, TestContent, TestDefinition};
    use crate::view_models::BlankView;

    fn app_with_one_test() -> QuizApp {
        let test = TestDefinition {
            id: 1,
            name: "Capitales".into(),
            content: TestContent {
                items: vec![
                    ContentItem::Text {
                        value: "La capital es ".into(),
                    },
                    ContentItem::Missing(Blank {
                        official_answers: vec!["París".into()],
                        additional_answers: vec![],
                        explanation: None,
                    }),
                    ContentItem::Missing(Blank {
                        official_answers: vec!["Sena".into()],
                        additional_answers: vec![],
                        explanation: None,
                    }),
                ],
            },
        };
        QuizApp::new(vec![test], ResultStore::in_memory())
    }

    #[test]
    fn open_unknown_test_is_a_no_op() {
        let mut app = app_with_one_test();
        app.open_test(99, false);
        assert_eq!(app.state, AppState::TableView);
        assert!(app.current_test_id.is_none());
    }

    #[test]
    fn partial_round_rebuilds_inputs_for_pending_blanks_only() {
        let mut app = app_with_one_test();
        app.open_test(1, false);
        assert_eq!(app.inputs.len(), 2);

        app.inputs[0] = "París".into();
        app.entregar_parcial();

        assert_eq!(app.state, AppState::TestView);
        assert_eq!(app.inputs.len(), 1, "el hueco acertado ya no pide input");
        assert!(matches!(
            app.blank_views[0],
            BlankView::Locked {
                status: AttemptStatus::Correct,
                ..
            }
        ));
    }

    #[test]
    fn empty_partial_submission_shows_notice_and_keeps_state() {
        let mut app = app_with_one_test();
        app.open_test(1, false);
        app.entregar_parcial();

        assert!(app.message.starts_with('⚠'));
        assert_eq!(app.state, AppState::TestView);
        assert!(app.store.is_untouched(1));
    }

    #[test]
    fn final_submission_moves_to_review() {
        let mut app = app_with_one_test();
        app.open_test(1, false);
        app.inputs[0] = "París".into();
        app.entregar_final();

        assert_eq!(app.state, AppState::Review);
        assert!(app.store.is_fully_complete(1));
    }

    #[test]
    fn reveal_locks_the_blank_and_refreshes_the_round() {
        let mut app = app_with_one_test();
        app.open_test(1, false);
        app.revelar_hueco(0);

        assert!(matches!(
            app.blank_views[0],
            BlankView::Locked {
                status: AttemptStatus::Revealed,
                ..
            }
        ));
        assert_eq!(app.inputs.len(), 1);
    }

    #[test]
    fn reset_returns_test_to_pristine_round() {
        let mut app = app_with_one_test();
        app.open_test(1, false);
        app.inputs = vec!["París".into(), "Sena".into()];
        app.entregar_final();

        app.reiniciar_test();
        assert!(app.store.is_untouched(1));
        assert_eq!(app.state, AppState::TestView);
        assert_eq!(app.inputs.len(), 2);
    }
}
