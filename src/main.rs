use cloze_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Cloze Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::from_disk()))),
    )
}
