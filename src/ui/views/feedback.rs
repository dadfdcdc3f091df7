// Animación del mensaje de acierto/fallo. El tiempo se mide en "frames" de 60 Hz
// para conservar el ritmo del pulso aunque la pantalla refresque a otra frecuencia.

use crate::QuizApp;
use crate::model::Outcome;
use crate::ui::render::{Renderer, ShapeKind};
use crate::ui::theme;
use egui::{Align2, Pos2, pos2};
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

const FRAMES_PER_SECOND: f32 = 60.0;
const STAR_COUNT: usize = 6;
const STAR_MAX_RADIUS: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedbackFrame {
    pub frames: f32,
    pub progress: f32,
    pub scale: f32,
    pub alpha: u8,
}

impl FeedbackFrame {
    pub fn at(elapsed: Duration, duration: Duration) -> Self {
        let frames = elapsed.as_secs_f32() * FRAMES_PER_SECOND;
        let progress = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        Self {
            frames,
            progress,
            scale: 1.0 + (frames * 0.1).sin() * 0.1,
            alpha: (255.0 * (1.0 - progress)).round() as u8,
        }
    }

    pub fn text_size(&self, width: f32) -> f32 {
        (width * 0.06 * self.scale).min(50.0)
    }

    pub fn star_radius(&self) -> f32 {
        STAR_MAX_RADIUS * self.progress
    }

    /// Diámetro de cada estrella: de 10 a 5 px.
    pub fn star_diameter(&self) -> f32 {
        10.0 * (1.0 - 0.5 * self.progress)
    }

    pub fn rotation(&self) -> f32 {
        self.frames * 0.05
    }
}

pub fn draw_feedback(app: &QuizApp, r: &mut impl Renderer, now: Duration, rng: &mut impl Rng) {
    let Some(feedback) = app.feedback() else {
        return;
    };
    let layout = app.layout();
    let elapsed = app.feedback_elapsed(now).unwrap_or_default();
    let frame = FeedbackFrame::at(elapsed, app.config.feedback_duration());

    let color = match feedback.outcome {
        Outcome::Correct => {
            draw_stars(r, layout.center(), &frame, rng);
            theme::with_alpha(theme::CORRECT, frame.alpha)
        }
        Outcome::Incorrect => theme::with_alpha(theme::WRONG, frame.alpha),
    };

    r.draw_text(
        feedback.outcome.message(),
        layout.center(),
        Align2::CENTER_CENTER,
        frame.text_size(layout.width),
        color,
    );
}

fn draw_stars(r: &mut impl Renderer, center: Pos2, frame: &FeedbackFrame, rng: &mut impl Rng) {
    let color = theme::with_alpha(theme::STAR, frame.alpha);
    let radius = frame.star_radius();
    for i in 0..STAR_COUNT {
        let angle = i as f32 / STAR_COUNT as f32 * TAU + frame.rotation();
        let x = angle.cos() * radius * rng.gen_range(0.5..1.0);
        let y = angle.sin() * radius * rng.gen_range(0.5..1.0);
        r.draw_shape(
            ShapeKind::Circle {
                center: pos2(center.x + x, center.y + y),
                radius: frame.star_diameter() / 2.0,
            },
            color,
        );
    }
}
