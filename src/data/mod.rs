// Document sources and the three-document loader
pub mod loader;
pub mod source;

// Re-export commonly used types
pub use loader::{LoadError, LoadedDocuments, load_documents};
#[cfg(not(target_arch = "wasm32"))]
pub use source::LocalDirSource;
pub use source::{DocumentSource, EmbeddedSource};
