use crate::QuizApp;
use crate::ui::render::Renderer;
use crate::ui::theme;
use egui::{Align2, vec2};

pub fn draw_error(app: &QuizApp, r: &mut impl Renderer) {
    let layout = app.layout();
    let center = layout.center();

    r.draw_text(
        "¡No se pudo cargar el quiz!",
        center - vec2(0.0, 50.0),
        Align2::CENTER_CENTER,
        layout.text_size,
        theme::WRONG,
    );
    r.draw_text(
        &format!(
            "Revisa que el archivo \"{}\" exista y tenga el formato correcto.",
            app.config.questions_file
        ),
        center,
        Align2::CENTER_CENTER,
        layout.text_size,
        theme::TEXT,
    );
}
