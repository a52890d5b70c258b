use serde::{Deserialize, Serialize};

/// Estado de un hueco tras un intento. Se serializa en minúsculas porque
/// es el mismo literal que guardamos en el almacén de resultados.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    Correct,
    Partial,
    Incorrect,
    Revealed,
}

impl AttemptStatus {
    /// Un hueco con estado asentado ya no vuelve a pedirse como input editable.
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            AttemptStatus::Correct | AttemptStatus::Partial | AttemptStatus::Revealed
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub user_input: String,
    pub status: AttemptStatus,
}

/// Registro por-test de intentos parciales: una entrada por hueco (en orden
/// de contenido) y el cerrojo de puntuación de cada uno.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttemptLedger {
    pub answers: Vec<Option<AttemptRecord>>,
    pub scoring_eligible: Vec<bool>,
}

/// Resultado final de un test: solo existe cuando todos los huecos están
/// asentados. `isComplete` falta en datos antiguos; se asume completo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub answers: Vec<AttemptRecord>,
    pub score: u32,
    pub total_blanks: u32,
    #[serde(default = "default_true")]
    pub is_complete: bool,
}

fn default_true() -> bool {
    true
}

/// Un hueco rellenable dentro del contenido de un test.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Blank {
    /// Respuestas oficiales (igualdad exacta). La primera es la canónica.
    pub official_answers: Vec<String>,
    /// Respuestas alternativas: puntúan como `partial`, nunca completo.
    #[serde(default)]
    pub additional_answers: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Elemento del contenido de un test: texto literal o hueco. En el banco
/// YAML cada item lleva un tag `type` con valor `text` o `missing`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { value: String },
    Missing(Blank),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TestContent {
    pub items: Vec<ContentItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TestDefinition {
    pub id: u32,
    pub name: String,
    pub content: TestContent,
}

impl TestDefinition {
    /// Huecos del test en orden de contenido. La posición dentro de este
    /// iterador es el índice estable que usa todo el estado por-hueco
    /// (nunca se deriva de la posición en pantalla).
    pub fn blanks(&self) -> impl Iterator<Item = &Blank> {
        self.content.items.iter().filter_map(|item| match item {
            ContentItem::Missing(blank) => Some(blank),
            ContentItem::Text { .. } => None,
        })
    }

    pub fn blank_count(&self) -> usize {
        self.blanks().count()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    TableView,
    TestView,
    Review,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::TableView
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_item_parses_text_and_missing_tags() {
        let yaml = r#"
- type: text
  value: "La capital es "
- type: missing
  officialAnswers: ["París"]
  additionalAnswers: ["Paris"]
"#;
        let items: Vec<ContentItem> = serde_yaml::from_str(yaml).expect("yaml ok");
        assert!(matches!(&items[0], ContentItem::Text { value } if value == "La capital es "));
        match &items[1] {
            ContentItem::Missing(blank) => {
                assert_eq!(blank.official_answers, vec!["París"]);
                assert_eq!(blank.additional_answers, vec!["Paris"]);
                assert!(blank.explanation.is_none());
            }
            _ => panic!("se esperaba un hueco"),
        }
    }

    #[test]
    fn attempt_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AttemptStatus::Revealed).unwrap(),
            "\"revealed\""
        );
        let status: AttemptStatus = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(status, AttemptStatus::Partial);
    }

    #[test]
    fn legacy_result_without_is_complete_parses_as_complete() {
        let json = r#"{"answers":[{"userInput":"a","status":"correct"}],"score":1,"totalBlanks":1}"#;
        let result: TestResult = serde_json::from_str(json).expect("json ok");
        assert!(result.is_complete);
        assert_eq!(result.answers[0].user_input, "a");
    }
}
