// Domain types projected out of the three configuration documents
pub mod achievement;
pub mod bot_config;
pub mod category;
pub mod palette;
pub mod pricing;
pub mod product;

// Re-export commonly used types
pub use achievement::Achievement;
pub use bot_config::{BotConfig, ConfigSection, SectionKind};
pub use category::CategoryIcon;
pub use palette::{ColorValue, LevelTier, Palette, ProfileCardConfig};
pub use pricing::{format_price, option_summary};
pub use product::{Product, ProductOption};
