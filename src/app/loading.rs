use super::*;

impl QuizApp {
    /// Escritorio: lectura síncrona del CSV (o del banco embebido).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn start_loading(&mut self) {
        let result = crate::data::read_questions_native(&self.config.questions_file);
        self.load(result);
    }

    /// Web: el CSV se descarga en segundo plano; `poll_loading` recoge el resultado.
    #[cfg(target_arch = "wasm32")]
    pub fn start_loading(&mut self) {
        let (tx, rx) = std::sync::mpsc::channel::<Result<QuestionBank, LoadError>>();
        self.pending_load = Some(rx);
        let url = self.config.questions_file.clone();
        log::info!("Descargando preguntas desde {url}");

        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::data::fetch_questions(&url).await;
            let _ = tx.send(result);
        });
    }

    pub fn poll_loading(&mut self) {
        let maybe_result = self
            .pending_load
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(result) = maybe_result {
            self.pending_load = None;
            self.load(result);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }
}
