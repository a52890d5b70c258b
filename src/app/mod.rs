use crate::data::read_tests_embedded;
use crate::model::{AppState, TestDefinition};
use eframe::egui;
use crate::storage::{FileStorage, ResultStore};
use crate::view_models::{BlankView, blank_views};

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;

pub struct QuizApp {
    pub tests: Vec<TestDefinition>,
    pub store: ResultStore,
    pub state: AppState,
    pub current_test_id: Option<u32>,
    /// Mapa hueco→bloqueado/editable de la ronda actual, en orden de contenido
    pub blank_views: Vec<BlankView>,
    /// Buffer de inputs: una cadena por hueco editable, en orden de contenido
    pub inputs: Vec<String>,
    pub message: String,
    pub confirm_reset: bool,
}

impl QuizApp {
    pub fn new(tests: Vec<TestDefinition>, store: ResultStore) -> Self {
        Self {
            tests,
            store,
            state: AppState::default(),
            current_test_id: None,
            blank_views: Vec::new(),
            inputs: Vec::new(),
            message: String::new(),
            confirm_reset: false,
        }
    }

    /// Arranque normal: catálogo embebido + progreso en fichero junto al binario
    pub fn from_disk() -> Self {
        let store = ResultStore::new(Box::new(FileStorage::open("cloze_progress.json")));
        Self::new(read_tests_embedded(), store)
    }

    /// Entrypoint desde la tabla: abre un test en modo examen o revisión.
    /// Un id desconocido no hace nada.
    pub fn open_test(&mut self, test_id: u32, review: bool) {
        if self.find_test(test_id).is_none() {
            return;
        }
        self.current_test_id = Some(test_id);
        self.message.clear();
        self.confirm_reset = false;
        if review {
            self.state = AppState::Review;
        } else {
            self.state = AppState::TestView;
            self.rebuild_round();
        }
    }

    pub fn volver_a_la_tabla(&mut self) {
        self.state = AppState::TableView;
        self.current_test_id = None;
        self.blank_views.clear();
        self.inputs.clear();
        self.message.clear();
        self.confirm_reset = false;
    }

    /// Recalcula el mapa de huecos y el buffer de inputs de la ronda a
    /// partir del libro de intentos guardado. Los huecos fallados vuelven
    /// con su último texto como prefill.
    pub(crate) fn rebuild_round(&mut self) {
        let Some(test) = self.current_test().cloned() else {
            self.blank_views.clear();
            self.inputs.clear();
            return;
        };
        let ledger = self.store.get_ledger(test.id);
        let views = blank_views(&test, ledger.as_ref());
        self.inputs = views
            .iter()
            .filter_map(|v| match v {
                BlankView::Editable { prefill, .. } => Some(prefill.clone()),
                BlankView::Locked { .. } => None,
            })
            .collect();
        self.blank_views = views;
    }
}
