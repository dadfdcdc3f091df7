use crate::QuizApp;
use crate::ui::render::Renderer;
use crate::ui::theme;
use egui::Align2;

pub fn draw_loading(app: &QuizApp, r: &mut impl Renderer) {
    let layout = app.layout();
    r.draw_text(
        "Cargando con mucho esfuerzo...",
        layout.center(),
        Align2::CENTER_CENTER,
        layout.text_size,
        theme::TEXT,
    );
}
