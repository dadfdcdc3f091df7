use cute_quiz::{QuizApp, QuizConfig};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = QuizConfig::embedded();
    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| {
            let mut app = QuizApp::new(config);
            app.start_loading();
            Ok(Box::new(app))
        }),
    )
}

// Web: se monta sobre el <canvas id="the_canvas_id"> de index.html
#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("No se encontró el canvas 'the_canvas_id'");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    let mut app = QuizApp::new(QuizConfig::embedded());
                    app.start_loading();
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar eframe: {e:?}");
        }
    });
}
