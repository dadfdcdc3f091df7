// src/ui/render.rs
use egui::{Align2, Color32, Pos2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Circle { center: Pos2, radius: f32 },
}

/// Primitivas de dibujo que usan las vistas. Coordenadas relativas a la ventana.
pub trait Renderer {
    fn draw_background(&mut self);
    fn draw_text(&mut self, content: &str, pos: Pos2, align: Align2, size: f32, color: Color32);
    fn draw_shape(&mut self, shape: ShapeKind, color: Color32);
}
