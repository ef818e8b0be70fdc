use eframe::{Frame, egui};
use poll_promise::Promise;

use crate::data::DocumentSource;
use crate::engine::DashboardEngine;
use crate::ui::app_async::LoadResult;
use crate::ui::utils::{ThemeColors, apply_theme_visuals};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SHUTDOWN;

pub struct DashboardApp {
    pub(super) engine: DashboardEngine,

    // Pending document load (None once it has been handed to the engine)
    pub(super) load_promise: Option<Promise<LoadResult>>,

    // Egui colors for the current theme slots, and the theme generation they
    // were built from
    pub(super) theme_colors: ThemeColors,
    applied_theme_generation: Option<u64>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, source: Box<dyn DocumentSource>) -> Self {
        let mut app = Self {
            engine: DashboardEngine::new(),
            load_promise: None,
            theme_colors: ThemeColors::default(),
            applied_theme_generation: None,
        };
        app.sync_theme(&cc.egui_ctx);
        app.start_load(source);
        app
    }

    /// Rebuilds the egui visuals when the engine rewrote the theme slots.
    fn sync_theme(&mut self, ctx: &egui::Context) {
        let generation = self.engine.theme().generation();
        if self.applied_theme_generation == Some(generation) {
            return;
        }

        self.theme_colors = ThemeColors::from_slots(self.engine.theme().slots());
        apply_theme_visuals(ctx, &self.theme_colors);
        self.applied_theme_generation = Some(generation);
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Abandon an in-flight load
        self.load_promise = None;

        #[cfg(debug_assertions)]
        if PRINT_SHUTDOWN {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_load(ctx);
        self.sync_theme(ctx);

        let level_before = self.engine.level();
        self.render_central_panel(ctx);

        // Show the new palette on the very next frame
        if self.engine.level() != level_before {
            ctx.request_repaint();
        }
    }
}
