// src/ui/painter.rs
use super::render::{Renderer, ShapeKind};
use super::theme::{BG_BOTTOM, BG_TOP};
use egui::{Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Shape};

/// Renderer sobre el `Painter` de egui, anclado a la esquina del panel central.
pub struct EguiRenderer<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> EguiRenderer<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Renderer for EguiRenderer<'_> {
    fn draw_background(&mut self) {
        // Degradado vertical: un quad con color por vértice
        let mut mesh = Mesh::default();
        let r = self.rect;
        mesh.colored_vertex(r.left_top(), BG_TOP);
        mesh.colored_vertex(r.right_top(), BG_TOP);
        mesh.colored_vertex(r.right_bottom(), BG_BOTTOM);
        mesh.colored_vertex(r.left_bottom(), BG_BOTTOM);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        self.painter.add(Shape::mesh(mesh));
    }

    fn draw_text(&mut self, content: &str, pos: Pos2, align: Align2, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            align,
            content,
            FontId::proportional(size),
            color,
        );
    }

    fn draw_shape(&mut self, shape: ShapeKind, color: Color32) {
        match shape {
            ShapeKind::Circle { center, radius } => {
                self.painter
                    .circle_filled(self.to_screen(center), radius, color);
            }
        }
    }
}
