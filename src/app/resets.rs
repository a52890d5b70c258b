use super::*;

impl QuizApp {
    /// Borra resultado e intentos del test actual y lo deja sin empezar,
    /// con una ronda nueva lista para rellenar.
    pub fn reiniciar_test(&mut self) {
        let Some(test_id) = self.current_test_id else {
            return;
        };
        self.store.clear(test_id);
        self.confirm_reset = false;
        self.message.clear();
        self.state = AppState::TestView;
        self.rebuild_round();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar el progreso de este test? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reiniciar_test();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
