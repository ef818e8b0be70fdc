use crate::config::{DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};
use crate::data::{LoadError, LoadedDocuments};
use crate::domain::Palette;
use crate::theme::{ThemeContext, apply_theme, resolve_palette};

use super::state::{LoadState, ReadyState};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

/// The dashboard's state, independent of any UI toolkit.
///
/// Owns the load state, the simulated level and the theme context. Every
/// change to the level or the load state re-resolves the palette and
/// re-applies the theme before returning.
pub struct DashboardEngine {
    state: LoadState,
    level: u32,
    theme: ThemeContext,
}

impl Default for DashboardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardEngine {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            level: DEFAULT_LEVEL,
            theme: ThemeContext::default(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Loaded data, only while `Ready`.
    pub fn ready(&self) -> Option<&ReadyState> {
        match &self.state {
            LoadState::Ready(ready) => Some(ready),
            _ => None,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    /// Accepts the outcome of the load. Only the first outcome counts; the
    /// state never leaves `Error` or `Ready`.
    pub fn on_load_result(&mut self, result: Result<LoadedDocuments, LoadError>) {
        if !self.is_loading() {
            log::warn!("Ignoring a second load result; the dashboard loads once per session");
            return;
        }

        self.state = match result {
            Ok(documents) => LoadState::Ready(ReadyState::new(documents)),
            Err(err) => {
                log::error!("❌ Failed to fetch data: {}", err);
                LoadState::Error(err)
            }
        };
        self.refresh_theme();
    }

    /// Moves the simulated level, clamped to the slider range, and re-applies
    /// the theme. Returns whether the level changed.
    pub fn set_level(&mut self, level: u32) -> bool {
        let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        if level == self.level {
            return false;
        }

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[level] {} -> {}", self.level, level);
        }

        self.level = level;
        self.refresh_theme();
        true
    }

    /// Palette for the current level, if any resolves.
    pub fn active_palette(&self) -> Option<&Palette> {
        let ready = self.ready()?;
        resolve_palette(self.level, ready.documents.profile_card.as_ref())
    }

    fn refresh_theme(&mut self) {
        let (palette, loaded) = match &self.state {
            LoadState::Ready(ready) => (
                resolve_palette(self.level, ready.documents.profile_card.as_ref()),
                true,
            ),
            LoadState::Loading | LoadState::Error(_) => (None, false),
        };
        apply_theme(&mut self.theme, palette, loaded);
    }
}
