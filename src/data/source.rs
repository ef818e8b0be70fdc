//! Where the configuration documents come from.
//!
//! Native builds read a directory on disk; the browser build (and the
//! `--embedded` flag) serves a demo set compiled into the binary.

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::config::RESOURCES;

#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Raw text of the document at `path`, or the reason it could not be retrieved.
    async fn fetch(&self, path: &str) -> Result<String>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

#[cfg(not(target_arch = "wasm32"))]
pub use local::LocalDirSource;

#[cfg(not(target_arch = "wasm32"))]
mod local {
    use super::DocumentSource;
    use anyhow::{Context, Result};
    use async_trait::async_trait;
    use std::path::PathBuf;

    /// Reads documents relative to a root directory.
    #[derive(Debug, Clone)]
    pub struct LocalDirSource {
        root: PathBuf,
    }

    impl LocalDirSource {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }
    }

    #[async_trait]
    impl DocumentSource for LocalDirSource {
        fn signature(&self) -> &'static str {
            "Local Directory"
        }

        async fn fetch(&self, path: &str) -> Result<String> {
            let full_path = self.root.join(path.trim_start_matches('/'));
            tokio::fs::read_to_string(&full_path)
                .await
                .with_context(|| format!("Failed to read {}", full_path.display()))
        }
    }
}

const EMBEDDED_CONFIG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/public/config.json"));
const EMBEDDED_PRODUCTS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/public/products.json"));
const EMBEDDED_ACHIEVEMENTS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/public/achievements_config.json"
));

/// The demo documents bundled with the application.
pub struct EmbeddedSource;

#[async_trait]
impl DocumentSource for EmbeddedSource {
    fn signature(&self) -> &'static str {
        "Embedded Demo Documents"
    }

    async fn fetch(&self, path: &str) -> Result<String> {
        let path = path.trim_start_matches('/');
        let text = if path == RESOURCES.config {
            EMBEDDED_CONFIG
        } else if path == RESOURCES.products {
            EMBEDDED_PRODUCTS
        } else if path == RESOURCES.achievements {
            EMBEDDED_ACHIEVEMENTS
        } else {
            return Err(anyhow!("No embedded document named {}", path));
        };
        Ok(text.to_string())
    }
}
