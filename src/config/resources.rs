//! Document names and locations for the three configuration files.

/// The fixed set of documents loaded once per session.
pub struct ResourcePaths {
    /// General bot configuration (sections + residual keys)
    pub config: &'static str,
    /// Product catalog (JSON array)
    pub products: &'static str,
    /// Achievements list (JSON array)
    pub achievements: &'static str,
}

pub const RESOURCES: ResourcePaths = ResourcePaths {
    config: "config.json",
    products: "products.json",
    achievements: "achievements_config.json",
};

pub const CONFIG_DOCUMENT: &str = RESOURCES.config;
pub const PRODUCTS_DOCUMENT: &str = RESOURCES.products;
pub const ACHIEVEMENTS_DOCUMENT: &str = RESOURCES.achievements;

/// Directory the native build reads documents from unless `--data-dir` is given.
pub const DEFAULT_DATA_DIR: &str = "public";
