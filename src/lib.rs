#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod theme;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{DocumentSource, EmbeddedSource, LoadError, LoadedDocuments, load_documents};
#[cfg(not(target_arch = "wasm32"))]
pub use data::LocalDirSource;
pub use domain::{Achievement, BotConfig, Palette, Product, ProfileCardConfig, format_price};
pub use engine::{DashboardEngine, LoadState};
pub use theme::{ThemeContext, apply_theme, resolve_palette};
pub use ui::DashboardApp;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding config.json, products.json and achievements_config.json
    #[arg(long, default_value = config::DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Show the bundled demo documents instead of reading --data-dir
    #[arg(long, default_value_t = false)]
    pub embedded: bool,
}

impl Cli {
    /// The document source selected by the command line.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn document_source(&self) -> Box<dyn DocumentSource> {
        if self.embedded {
            Box::new(EmbeddedSource)
        } else {
            Box::new(LocalDirSource::new(self.data_dir.clone()))
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    source: Box<dyn DocumentSource>,
) -> Box<dyn eframe::App> {
    Box::new(ui::DashboardApp::new(cc, source))
}
