use crate::model::{AttemptLedger, AttemptRecord, AttemptStatus};

impl AttemptLedger {
    /// Libro de intentos recién estrenado: sin respuestas y con todos los
    /// huecos todavía elegibles para puntuar.
    pub fn new(blank_count: usize) -> Self {
        Self {
            answers: vec![None; blank_count],
            scoring_eligible: vec![true; blank_count],
        }
    }

    pub fn status_at(&self, index: usize) -> Option<AttemptStatus> {
        self.answers.get(index)?.as_ref().map(|r| r.status)
    }

    /// Un hueco bloqueado ya no se vuelve a recoger como input editable.
    pub fn is_locked(&self, index: usize) -> bool {
        self.status_at(index).is_some_and(|s| s.is_settled())
    }

    /// Escribe el intento de un hueco. Marcarlo `incorrect` cierra el
    /// cerrojo de puntuación para siempre; un `partial` por respuesta
    /// alternativa no lo toca.
    pub fn apply_classification(&mut self, index: usize, user_input: &str, status: AttemptStatus) {
        if index >= self.answers.len() {
            return;
        }
        self.answers[index] = Some(AttemptRecord {
            user_input: user_input.to_string(),
            status,
        });
        if status == AttemptStatus::Incorrect {
            self.scoring_eligible[index] = false;
        }
    }

    /// Fuerza el estado `revealed` conservando el último input escrito
    /// (o vacío si nunca hubo). Revelar dos veces no cambia nada.
    pub fn reveal(&mut self, index: usize) {
        if index >= self.answers.len() {
            return;
        }
        let last_input = self.answers[index]
            .as_ref()
            .map(|r| r.user_input.clone())
            .unwrap_or_default();
        self.answers[index] = Some(AttemptRecord {
            user_input: last_input,
            status: AttemptStatus::Revealed,
        });
        self.scoring_eligible[index] = false;
    }

    pub fn all_settled(&self) -> bool {
        self.answers
            .iter()
            .all(|a| a.as_ref().is_some_and(|r| r.status.is_settled()))
    }

    /// Respuestas completas para construir el resultado final; `None`
    /// mientras quede algún hueco sin asentar.
    pub fn completed_answers(&self) -> Option<Vec<AttemptRecord>> {
        if !self.all_settled() {
            return None;
        }
        Some(self.answers.iter().flatten().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ledger_is_empty_and_fully_eligible() {
        let ledger = AttemptLedger::new(3);
        assert_eq!(ledger.answers, vec![None, None, None]);
        assert_eq!(ledger.scoring_eligible, vec![true, true, true]);
        assert!(!ledger.all_settled());
        assert!(!ledger.is_locked(0));
    }

    #[test]
    fn incorrect_latches_eligibility_one_way() {
        let mut ledger = AttemptLedger::new(1);
        ledger.apply_classification(0, "mal", AttemptStatus::Incorrect);
        assert!(!ledger.scoring_eligible[0]);
        assert!(!ledger.is_locked(0));

        // Un acierto posterior no reabre el cerrojo
        ledger.apply_classification(0, "bien", AttemptStatus::Partial);
        assert!(!ledger.scoring_eligible[0]);
        assert!(ledger.is_locked(0));
    }

    #[test]
    fn partial_via_additional_answer_keeps_eligibility() {
        let mut ledger = AttemptLedger::new(1);
        ledger.apply_classification(0, "Paris", AttemptStatus::Partial);
        assert!(ledger.scoring_eligible[0]);
        assert!(ledger.is_locked(0));
    }

    #[test]
    fn reveal_keeps_last_input_and_is_idempotent() {
        let mut ledger = AttemptLedger::new(2);
        ledger.apply_classification(0, "casi", AttemptStatus::Incorrect);
        ledger.reveal(0);
        assert_eq!(
            ledger.answers[0],
            Some(AttemptRecord {
                user_input: "casi".into(),
                status: AttemptStatus::Revealed,
            })
        );
        assert!(!ledger.scoring_eligible[0]);

        let before = ledger.clone();
        ledger.reveal(0);
        assert_eq!(ledger, before);

        // Revelar un hueco jamás intentado deja el input vacío
        ledger.reveal(1);
        assert_eq!(ledger.answers[1].as_ref().unwrap().user_input, "");
        assert!(!ledger.scoring_eligible[1]);
    }

    #[test]
    fn completed_answers_only_when_everything_settled() {
        let mut ledger = AttemptLedger::new(2);
        ledger.apply_classification(0, "a", AttemptStatus::Correct);
        assert!(ledger.completed_answers().is_none());

        // Un hueco incorrect sigue sin asentar
        ledger.apply_classification(1, "b", AttemptStatus::Incorrect);
        assert!(ledger.completed_answers().is_none());

        ledger.reveal(1);
        let answers = ledger.completed_answers().expect("todo asentado");
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].status, AttemptStatus::Correct);
        assert_eq!(answers[1].status, AttemptStatus::Revealed);
    }

    #[test]
    fn out_of_range_index_is_a_no_op() {
        let mut ledger = AttemptLedger::new(1);
        ledger.apply_classification(5, "x", AttemptStatus::Correct);
        ledger.reveal(5);
        assert_eq!(ledger, AttemptLedger::new(1));
    }
}
