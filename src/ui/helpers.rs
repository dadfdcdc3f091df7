// src/ui/helpers.rs
use super::theme;
use egui::{Button, Color32, RichText, Ui, Vec2, vec2};

pub const BUTTON_CORNER: f32 = 25.0;

/// Botón redondeado azul con sombra; el color cambia al pasar el ratón.
pub fn cute_button(ui: &mut Ui, label: String, size: Vec2, font_size: f32) -> bool {
    let shadow = egui::Rect::from_min_size(ui.cursor().min + vec2(3.0, 3.0), size);
    ui.painter()
        .rect_filled(shadow, BUTTON_CORNER, Color32::from_black_alpha(50));

    let widgets = &mut ui.style_mut().visuals.widgets;
    widgets.inactive.weak_bg_fill = theme::BUTTON;
    widgets.hovered.weak_bg_fill = theme::BUTTON_HOVER;
    widgets.active.weak_bg_fill = theme::BUTTON_HOVER;
    widgets.inactive.bg_stroke = egui::Stroke::NONE;
    widgets.hovered.bg_stroke = egui::Stroke::NONE;

    let text = RichText::new(label).size(font_size).color(Color32::WHITE);
    ui.add_sized(size, Button::new(text).corner_radius(BUTTON_CORNER))
        .clicked()
}
