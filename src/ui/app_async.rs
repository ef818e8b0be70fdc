use eframe::egui;
use poll_promise::Promise;

use crate::data::{DocumentSource, LoadError, LoadedDocuments, load_documents};
use crate::ui::app::DashboardApp;

pub(super) type LoadResult = Result<LoadedDocuments, LoadError>;

impl DashboardApp {
    /// Starts the one and only load of the session.
    pub(super) fn start_load(&mut self, source: Box<dyn DocumentSource>) {
        if self.load_promise.is_some() || !self.engine.is_loading() {
            return;
        }

        log::info!("Loading configuration documents from {}...", source.signature());

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("config_load", move || run_load(source.as_ref()));

        #[cfg(target_arch = "wasm32")]
        let promise = {
            let result = futures::executor::block_on(load_documents(source.as_ref()));
            Promise::from_ready(result)
        };

        self.load_promise = Some(promise);
    }

    /// Hands a finished load to the engine; keeps the UI repainting while it
    /// is still pending.
    pub(super) fn poll_load(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.load_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok(result) => self.engine.on_load_result(result),
            Err(pending) => {
                self.load_promise = Some(pending);
                ctx.request_repaint();
            }
        }
    }
}

/// Drives the loader on a private current-thread runtime (the GUI thread has none).
#[cfg(not(target_arch = "wasm32"))]
fn run_load(source: &dyn DocumentSource) -> LoadResult {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LoadError::FetchFailed {
            path: "<runtime>".to_string(),
            reason: e.to_string(),
        })?;
    runtime.block_on(load_documents(source))
}
