// src/ui/theme.rs
use egui::Color32;

pub const BG_TOP: Color32 = Color32::from_rgb(173, 216, 230);
pub const BG_BOTTOM: Color32 = Color32::from_rgb(255, 223, 186);
pub const TEXT: Color32 = Color32::from_rgb(50, 50, 50);
pub const BUTTON: Color32 = Color32::from_rgb(100, 180, 255);
pub const BUTTON_HOVER: Color32 = Color32::from_rgb(70, 150, 220);
pub const CORRECT: Color32 = Color32::from_rgb(60, 180, 70);
pub const WRONG: Color32 = Color32::from_rgb(255, 100, 100);
pub const STAR: Color32 = Color32::from_rgb(255, 255, 0);

/// Mismo color con otra opacidad (0 = transparente).
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Interpolación lineal entre dos colores opacos, `t` en [0, 1].
pub fn lerp_rgb(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}
