//! The four theme slots shared between the palette logic and the renderer.

use crate::config::DEFAULT_THEME;
use crate::domain::palette::{ColorValue, Palette};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_THEME_CHANGES;

/// Current values of the four named visual variables, as CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSlots {
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text_primary: String,
}

impl Default for ThemeSlots {
    fn default() -> Self {
        Self {
            accent: DEFAULT_THEME.accent.to_string(),
            background: DEFAULT_THEME.background.to_string(),
            surface: DEFAULT_THEME.surface.to_string(),
            text_primary: DEFAULT_THEME.text_primary.to_string(),
        }
    }
}

impl ThemeSlots {
    /// Single-color projection of a palette. An empty color list falls back
    /// to the built-in value for that slot.
    pub fn from_palette(palette: &Palette) -> Self {
        let pick = |value: &ColorValue, fallback: &str| {
            value.primary().unwrap_or(fallback).to_string()
        };
        Self {
            accent: pick(&palette.accent, DEFAULT_THEME.accent),
            background: pick(&palette.background, DEFAULT_THEME.background),
            surface: pick(&palette.surface, DEFAULT_THEME.surface),
            text_primary: pick(&palette.text, DEFAULT_THEME.text_primary),
        }
    }
}

/// Owner of the theme slots. Only [`apply_theme`] writes to it, and it always
/// replaces all four slots at once.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    slots: ThemeSlots,
    generation: u64,
}

impl ThemeContext {
    pub fn slots(&self) -> &ThemeSlots {
        &self.slots
    }

    /// Number of writes so far; lets the renderer skip rebuilding visuals.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn replace(&mut self, slots: ThemeSlots) {
        #[cfg(debug_assertions)]
        if PRINT_THEME_CHANGES && slots != self.slots {
            log::info!("🎨 Theme slots -> {:?}", slots);
        }
        self.slots = slots;
        self.generation += 1;
    }
}

/// Pushes a resolved palette into the theme context.
///
/// - `Some(palette)`: all four slots take the palette's colors.
/// - `None` once a configuration is loaded: all four slots reset to defaults.
/// - `None` before anything loaded: untouched.
pub fn apply_theme(ctx: &mut ThemeContext, palette: Option<&Palette>, config_loaded: bool) {
    match palette {
        Some(palette) => ctx.replace(ThemeSlots::from_palette(palette)),
        None if config_loaded => ctx.replace(ThemeSlots::default()),
        None => {}
    }
}
