use crate::QuizApp;
use crate::model::QUESTION_MISSING;
use crate::ui::render::Renderer;
use crate::ui::theme;
use egui::{Align2, pos2};

pub fn draw_quiz(app: &QuizApp, r: &mut impl Renderer) {
    let layout = app.layout();

    r.draw_text(
        &app.question_counter().label(),
        layout.at_height(0.1),
        Align2::CENTER_CENTER,
        layout.text_size,
        theme::TEXT,
    );

    let prompt = app
        .current_question()
        .map(|q| q.prompt_text())
        .unwrap_or(QUESTION_MISSING);
    r.draw_text(
        prompt,
        layout.at_height(0.3),
        Align2::CENTER_CENTER,
        layout.text_size,
        theme::TEXT,
    );

    draw_score(app, r);
}

/// Puntuación arriba a la derecha
fn draw_score(app: &QuizApp, r: &mut impl Renderer) {
    let layout = app.layout();
    r.draw_text(
        &format!("Puntuación: {} / {}", app.display_score(), app.config.max_score),
        pos2(layout.width - 20.0, 20.0),
        Align2::RIGHT_TOP,
        layout.text_size,
        theme::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::model::{OptionId, Question};
    use crate::ui::render::recording::{DrawCall, RecordingRenderer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn quiz_app(bank: Vec<Question>) -> QuizApp {
        let mut app = QuizApp::with_rng(QuizConfig::default(), StdRng::seed_from_u64(3));
        app.load(Ok(bank));
        app.resize(1000.0, 800.0);
        app.activate(Duration::ZERO);
        app
    }

    #[test]
    fn draws_counter_prompt_and_score() {
        let app = quiz_app(vec![Question {
            prompt: Some("¿Dos más dos?".into()),
            options: [Some("4".into()), None, None],
            correct: Some(OptionId::A),
        }]);
        let mut r = RecordingRenderer::default();
        draw_quiz(&app, &mut r);
        assert_eq!(
            r.texts(),
            vec!["Pregunta 1 de 1", "¿Dos más dos?", "Puntuación: 0 / 100"]
        );
        match r.text("Puntuación: 0 / 100") {
            Some(DrawCall::Text { pos, align, .. }) => {
                assert_eq!(*pos, pos2(980.0, 20.0));
                assert_eq!(*align, Align2::RIGHT_TOP);
            }
            other => panic!("sin marcador de puntuación: {other:?}"),
        }
    }

    #[test]
    fn missing_prompt_shows_placeholder() {
        let app = quiz_app(vec![Question::default()]);
        let mut r = RecordingRenderer::default();
        draw_quiz(&app, &mut r);
        assert!(r.text(QUESTION_MISSING).is_some());
    }
}
