//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; they only take effect in builds with
//! `debug_assertions` so release builds remain quiet.

/// Emit how long the three-document load took and which source served it.
pub const PRINT_LOAD_TIMING: bool = true;

/// Emit a line every time the theme slots are rewritten.
pub const PRINT_THEME_CHANGES: bool = false;

/// Emit UI interaction logs (e.g., level slider moves).
pub const PRINT_UI_INTERACTIONS: bool = false;

/// Emit shutdown app messages.
pub const PRINT_SHUTDOWN: bool = false;
