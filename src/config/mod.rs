//! Configuration module for the dashboard application.

pub mod debug; // Flags are read as crate::config::debug::PRINT_*
pub mod resources;
pub mod theme;

// Re-export commonly used items
pub use resources::{
    ACHIEVEMENTS_DOCUMENT, CONFIG_DOCUMENT, DEFAULT_DATA_DIR, PRODUCTS_DOCUMENT, RESOURCES,
};
pub use theme::{
    DEFAULT_LEVEL, DEFAULT_THEME, LEVEL_RANGE, MAX_LEVEL, MIN_LEVEL, ThemeDefaults,
};
