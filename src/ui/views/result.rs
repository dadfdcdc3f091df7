use crate::QuizApp;
use crate::ui::render::Renderer;
use crate::ui::theme;
use egui::Align2;

pub fn draw_result(app: &QuizApp, r: &mut impl Renderer) {
    let layout = app.layout();

    r.draw_text(
        "Fin del quiz",
        layout.at_height(0.4),
        Align2::CENTER_CENTER,
        (layout.width * 0.05).min(35.0),
        theme::TEXT,
    );
    r.draw_text(
        &format!(
            "Puntuación final: {} / {}",
            app.display_score(),
            app.config.max_score
        ),
        layout.center(),
        Align2::CENTER_CENTER,
        layout.text_size,
        theme::TEXT,
    );

    let footer = if app.can_restart() {
        "Haz clic para volver a empezar"
    } else {
        "Terminando..."
    };
    r.draw_text(
        footer,
        layout.at_height(0.6),
        Align2::CENTER_CENTER,
        layout.text_size,
        theme::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::model::{OptionId, Question};
    use crate::ui::render::recording::RecordingRenderer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    #[test]
    fn footer_changes_after_cooldown() {
        let mut app = QuizApp::with_rng(QuizConfig::default(), StdRng::seed_from_u64(2));
        app.load(Ok(vec![Question {
            correct: Some(OptionId::B),
            ..Question::default()
        }]));
        app.activate(Duration::ZERO);
        app.submit_answer(OptionId::B, Duration::ZERO);
        app.tick(Duration::from_millis(1500));

        let mut r = RecordingRenderer::default();
        draw_result(&app, &mut r);
        assert_eq!(
            r.texts(),
            vec!["Fin del quiz", "Puntuación final: 100 / 100", "Terminando..."]
        );

        app.tick(Duration::from_millis(2000));
        let mut r = RecordingRenderer::default();
        draw_result(&app, &mut r);
        assert_eq!(r.texts()[2], "Haz clic para volver a empezar");
    }
}
