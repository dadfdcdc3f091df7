mod helpers;
pub mod layout;
pub mod painter;
pub mod render;
pub mod theme;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{canvas_panel, option_buttons};
use painter::EguiRenderer;
use render::Renderer;
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));

        self.poll_loading();
        let screen = ctx.screen_rect();
        self.resize(screen.width(), screen.height());
        self.tick(now);

        // Fondo + pantalla del estado actual
        canvas_panel(ctx, |ui, rect| {
            let mut renderer = EguiRenderer::new(ui.painter(), rect);
            renderer.draw_background();
            match self.state() {
                AppState::Loading => views::loading::draw_loading(self, &mut renderer),
                AppState::Error => views::error::draw_error(self, &mut renderer),
                AppState::Start => views::start::draw_start(self, &mut renderer),
                AppState::Quiz => views::quiz::draw_quiz(self, &mut renderer),
                AppState::Feedback => views::feedback::draw_feedback(
                    self,
                    &mut renderer,
                    now,
                    &mut rand::thread_rng(),
                ),
                AppState::Result => views::result::draw_result(self, &mut renderer),
            }
        });

        // Input: respuesta con los botones, o clic en cualquier parte
        if let Some(choice) = option_buttons(self, ctx) {
            self.submit_answer(choice, now);
        } else if ctx.input(|i| i.pointer.primary_clicked()) {
            self.activate(now);
        }

        match self.state() {
            AppState::Loading | AppState::Feedback => ctx.request_repaint(),
            _ => {
                if let Some(due) = self.next_wakeup() {
                    ctx.request_repaint_after(due.saturating_sub(now));
                }
            }
        }
    }
}
