// src/layout.rs

use egui::{Pos2, Rect, Vec2, pos2, vec2};

pub const BUTTON_HEIGHT: f32 = 50.0;
pub const BUTTON_GAP: f32 = 15.0;

/// Geometría de la pantalla, recalculada cuando cambia el tamaño de la ventana.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLayout {
    pub width: f32,
    pub height: f32,
    pub text_size: f32,
    pub button_width: f32,
    pub button_font_size: f32,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::for_viewport(800.0, 600.0)
    }
}

impl ScreenLayout {
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let button_width = (width * 0.7).min(400.0);
        Self {
            width,
            height,
            text_size: (width * 0.035).clamp(16.0, 25.0),
            button_width,
            button_font_size: (button_width * 0.045).min(18.0),
        }
    }

    pub fn center(&self) -> Pos2 {
        pos2(self.width / 2.0, self.height / 2.0)
    }

    /// Punto centrado horizontalmente a una fracción de la altura.
    pub fn at_height(&self, fraction: f32) -> Pos2 {
        pos2(self.width / 2.0, self.height * fraction)
    }

    pub fn button_rect(&self, index: usize) -> Rect {
        let spacing = BUTTON_HEIGHT + BUTTON_GAP;
        let top = self.height * 0.55 + index as f32 * spacing;
        let left = self.width / 2.0 - self.button_width / 2.0;
        Rect::from_min_size(pos2(left, top), self.button_size())
    }

    pub fn button_size(&self) -> Vec2 {
        vec2(self.button_width, BUTTON_HEIGHT)
    }
}
