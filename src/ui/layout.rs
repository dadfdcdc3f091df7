use super::helpers::cute_button;
use crate::QuizApp;
use crate::model::OptionId;
use egui::{Area, CentralPanel, Context, Id, Order, Rect, Ui};

/// Panel central sin marco que ocupa toda la ventana (el "canvas").
pub fn canvas_panel(ctx: &Context, inner: impl FnOnce(&mut Ui, Rect)) {
    CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            inner(ui, rect);
        });
}

/// Los tres botones de respuesta. Sólo se muestran en `Quiz`; devuelve la opción pulsada.
pub fn option_buttons(app: &QuizApp, ctx: &Context) -> Option<OptionId> {
    if !app.options_visible() {
        return None;
    }

    let layout = app.layout();
    let mut chosen = None;
    for (i, option) in app.option_labels().into_iter().enumerate() {
        let rect = layout.button_rect(i);
        Area::new(Id::new(("option_button", i)))
            .order(Order::Foreground)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                if cute_button(ui, option.label(), rect.size(), layout.button_font_size) {
                    chosen = Some(option.id);
                }
            });
    }
    chosen
}
