//! Level simulator bounds and the built-in theme.

use std::ops::RangeInclusive;

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 50;
pub const DEFAULT_LEVEL: u32 = 1;
pub const LEVEL_RANGE: RangeInclusive<u32> = MIN_LEVEL..=MAX_LEVEL;

/// Theme slot values used when no palette resolves for a loaded configuration.
pub struct ThemeDefaults {
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text_primary: &'static str,
}

pub const DEFAULT_THEME: ThemeDefaults = ThemeDefaults {
    accent: "#3b82f6",
    background: "#111827",
    surface: "#1f2937",
    text_primary: "#f9fafb",
};
