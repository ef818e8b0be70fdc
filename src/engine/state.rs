use crate::data::{LoadError, LoadedDocuments};
use crate::domain::{ConfigSection, format_price};

/// Lifecycle of the single load attempt.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    /// Terminal. Keeps the error for diagnostics only; no document data.
    Error(LoadError),
    /// Terminal.
    Ready(ReadyState),
}

/// Loaded documents plus the display strings derived from them.
///
/// Derived once when the load completes: the documents never change
/// afterwards, so the renderer reads these every frame without recomputing.
#[derive(Debug, Clone)]
pub struct ReadyState {
    pub documents: LoadedDocuments,
    /// One label per product, same order as `documents.products`.
    pub price_labels: Vec<String>,
    pub sections: Vec<ConfigSection>,
}

impl ReadyState {
    pub fn new(documents: LoadedDocuments) -> Self {
        let price_labels = documents.products.iter().map(format_price).collect();
        let sections = documents.config.sections();
        Self {
            documents,
            price_labels,
            sections,
        }
    }
}
