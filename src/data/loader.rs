//! One-shot, all-or-nothing load of the three configuration documents.

use serde::de::DeserializeOwned;
use std::fmt;

use crate::config::{ACHIEVEMENTS_DOCUMENT, CONFIG_DOCUMENT, PRODUCTS_DOCUMENT};
use crate::data::source::DocumentSource;
use crate::domain::{Achievement, BotConfig, Product, ProfileCardConfig};
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_LOAD_TIMING;

/// Everything the dashboard shows, loaded together.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocuments {
    pub config: BotConfig,
    pub products: Vec<Product>,
    pub achievements: Vec<Achievement>,
    /// Parsed once from `config.profile_card`.
    pub profile_card: Option<ProfileCardConfig>,
}

impl LoadedDocuments {
    pub fn new(config: BotConfig, products: Vec<Product>, achievements: Vec<Achievement>) -> Self {
        let profile_card = config.profile_card_config();
        Self {
            config,
            products,
            achievements,
            profile_card,
        }
    }
}

/// The load failed. Transport and parse failures are not distinguished;
/// `path` and `reason` are for the log only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    FetchFailed { path: String, reason: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::FetchFailed { path, reason } => {
                write!(f, "Failed to fetch one or more configuration files ({}: {})", path, reason)
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl LoadError {
    fn fetch_failed(path: &str, reason: impl fmt::Display) -> Self {
        LoadError::FetchFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Fetches the three documents concurrently and parses them.
///
/// The first failure wins and the other fetches are dropped; no partial
/// result is ever returned.
pub async fn load_documents(source: &dyn DocumentSource) -> Result<LoadedDocuments, LoadError> {
    #[cfg_attr(not(debug_assertions), allow(unused_variables))]
    let started = now();

    let (config_text, products_text, achievements_text) = futures::try_join!(
        fetch(source, CONFIG_DOCUMENT),
        fetch(source, PRODUCTS_DOCUMENT),
        fetch(source, ACHIEVEMENTS_DOCUMENT),
    )?;

    let config: BotConfig = parse(CONFIG_DOCUMENT, &config_text)?;
    let products: Vec<Product> = parse(PRODUCTS_DOCUMENT, &products_text)?;
    let achievements: Vec<Achievement> = parse(ACHIEVEMENTS_DOCUMENT, &achievements_text)?;

    #[cfg(debug_assertions)]
    if PRINT_LOAD_TIMING {
        log::info!(
            "Loaded {} products and {} achievements from {} in {}ms",
            products.len(),
            achievements.len(),
            source.signature(),
            crate::utils::app_time::elapsed_ms(started)
        );
    }

    Ok(LoadedDocuments::new(config, products, achievements))
}

async fn fetch(source: &dyn DocumentSource, path: &str) -> Result<String, LoadError> {
    source
        .fetch(path)
        .await
        .map_err(|e| LoadError::fetch_failed(path, format!("{:#}", e)))
}

fn parse<T: DeserializeOwned>(path: &str, text: &str) -> Result<T, LoadError> {
    serde_json::from_str(text).map_err(|e| LoadError::fetch_failed(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::EmbeddedSource;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// In-memory source; a path mapped to `Err` simulates a failed request.
    struct MemorySource(HashMap<&'static str, std::result::Result<String, String>>);

    impl MemorySource {
        fn valid() -> Self {
            Self(HashMap::from([
                (
                    CONFIG_DOCUMENT,
                    Ok(r##"{
                        "BOT_NAME": "ResellBoost",
                        "PROFILE_CARD_CONFIG": {
                            "DEFAULT_PALETTE": { "accent": "#111111", "background": "#000000", "surface": "#222222", "text": "#ffffff" },
                            "LEVEL_PALETTES": [
                                { "level": 10, "palette": { "accent": ["#cd7f32", "#b87333"], "background": "#1c1917", "surface": "#292524", "text": "#fafaf9" } }
                            ]
                        }
                    }"##
                    .to_string()),
                ),
                (
                    PRODUCTS_DOCUMENT,
                    Ok(r#"[{ "id": "p1", "name": "Nitro", "category": "Comptes Premium", "price": 4.5 }]"#
                        .to_string()),
                ),
                (
                    ACHIEVEMENTS_DOCUMENT,
                    Ok(r#"[{ "id": "a1", "name": "Premier pas", "description": "", "reward_xp": 50 }]"#
                        .to_string()),
                ),
            ]))
        }

        fn with(mut self, path: &'static str, doc: std::result::Result<&str, &str>) -> Self {
            self.0.insert(path, doc.map(str::to_string).map_err(str::to_string));
            self
        }
    }

    #[async_trait]
    impl DocumentSource for MemorySource {
        fn signature(&self) -> &'static str {
            "Memory"
        }

        async fn fetch(&self, path: &str) -> Result<String> {
            match self.0.get(path) {
                Some(Ok(text)) => Ok(text.clone()),
                Some(Err(status)) => Err(anyhow!("request failed: {}", status)),
                None => Err(anyhow!("404 {}", path)),
            }
        }
    }

    /// Holds every fetch until all three documents have been requested, so a
    /// loader that fetched them one after another would never finish.
    struct BarrierSource {
        inner: MemorySource,
        barrier: tokio::sync::Barrier,
    }

    #[async_trait]
    impl DocumentSource for BarrierSource {
        fn signature(&self) -> &'static str {
            "Barrier"
        }

        async fn fetch(&self, path: &str) -> Result<String> {
            self.barrier.wait().await;
            self.inner.fetch(path).await
        }
    }

    #[tokio::test]
    async fn loads_all_three_documents() {
        let docs = load_documents(&MemorySource::valid()).await.unwrap();
        assert_eq!(docs.products.len(), 1);
        assert_eq!(docs.products[0].name, "Nitro");
        assert_eq!(docs.achievements[0].reward_xp, "50");
        assert!(docs.config.general.contains_key("BOT_NAME"));
        assert_eq!(docs.profile_card.as_ref().map(|c| c.tiers().len()), Some(1));
    }

    #[tokio::test]
    async fn the_three_fetches_are_in_flight_together() {
        let source = BarrierSource {
            inner: MemorySource::valid(),
            barrier: tokio::sync::Barrier::new(3),
        };
        let loaded = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            load_documents(&source),
        )
        .await
        .expect("fetches were issued one at a time");
        assert_eq!(loaded.unwrap().products.len(), 1);
    }

    #[tokio::test]
    async fn any_failed_fetch_fails_the_whole_load() {
        for path in [CONFIG_DOCUMENT, PRODUCTS_DOCUMENT, ACHIEVEMENTS_DOCUMENT] {
            let source = MemorySource::valid().with(path, Err("500"));
            let err = load_documents(&source).await.unwrap_err();
            let LoadError::FetchFailed { path: failed, .. } = err;
            assert_eq!(failed, path);
        }
    }

    #[tokio::test]
    async fn parse_failures_use_the_same_error() {
        let source = MemorySource::valid().with(PRODUCTS_DOCUMENT, Ok("{ not json"));
        assert!(matches!(
            load_documents(&source).await,
            Err(LoadError::FetchFailed { .. })
        ));
    }

    #[tokio::test]
    async fn wrong_document_shapes_are_rejected() {
        let config_array = MemorySource::valid().with(CONFIG_DOCUMENT, Ok("[]"));
        assert!(load_documents(&config_array).await.is_err());

        let products_object = MemorySource::valid().with(PRODUCTS_DOCUMENT, Ok("{}"));
        assert!(load_documents(&products_object).await.is_err());
    }

    #[tokio::test]
    async fn bundled_demo_documents_load() {
        let docs = load_documents(&EmbeddedSource).await.unwrap();
        assert!(!docs.products.is_empty());
        assert!(!docs.achievements.is_empty());
        assert!(docs.profile_card.is_some());
    }
}
