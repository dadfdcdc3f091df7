use crate::QuizApp;
use crate::ui::render::Renderer;
use crate::ui::theme;
use egui::Align2;

pub fn draw_start(app: &QuizApp, r: &mut impl Renderer) {
    let layout = app.layout();
    r.draw_text(
        "¡Bienvenido al quiz!",
        layout.at_height(0.4),
        Align2::CENTER_CENTER,
        layout.text_size,
        theme::TEXT,
    );
    r.draw_text(
        "Haz clic en cualquier parte para empezar",
        layout.center(),
        Align2::CENTER_CENTER,
        layout.text_size,
        theme::TEXT,
    );
}
