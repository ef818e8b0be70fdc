use eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, RichText, Stroke, Ui, Visuals};

use crate::config::DEFAULT_THEME;
use crate::theme::ThemeSlots;
use crate::ui::config::UI_CONFIG;

/// The four theme slots converted to egui colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeColors {
    pub accent: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub text_primary: Color32,
}

impl ThemeColors {
    /// A slot that is not a parseable CSS color falls back to the built-in
    /// value for that slot.
    pub fn from_slots(slots: &ThemeSlots) -> Self {
        Self {
            accent: slot_color(&slots.accent, DEFAULT_THEME.accent),
            background: slot_color(&slots.background, DEFAULT_THEME.background),
            surface: slot_color(&slots.surface, DEFAULT_THEME.surface),
            text_primary: slot_color(&slots.text_primary, DEFAULT_THEME.text_primary),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::from_slots(&ThemeSlots::default())
    }
}

/// Parses any CSS color (`#rgb`, `#rrggbb`, `rgb(...)`, named colors, ...).
pub fn css_to_color32(css: &str) -> Option<Color32> {
    colorgrad::Color::from_html(css).ok().map(to_egui_color)
}

fn slot_color(css: &str, fallback: &str) -> Color32 {
    css_to_color32(css)
        .or_else(|| css_to_color32(fallback))
        .unwrap_or(Color32::GRAY)
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], rgba8[3])
}

/// Installs the theme colors as the application visuals.
pub fn apply_theme_visuals(ctx: &Context, colors: &ThemeColors) {
    let mut visuals = Visuals::dark();

    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.surface;
    visuals.extreme_bg_color = colors.background;
    visuals.faint_bg_color = colors.surface;
    visuals.override_text_color = Some(colors.text_primary);
    visuals.hyperlink_color = colors.accent;

    // Slider rail and handle follow the accent color
    visuals.selection.bg_fill = colors.accent;
    visuals.selection.stroke = Stroke::new(1.0, colors.text_primary);
    visuals.slider_trailing_fill = true;
    visuals.widgets.inactive.bg_fill = colors.accent;
    visuals.widgets.hovered.bg_fill = colors.accent;
    visuals.widgets.active.bg_fill = colors.accent;

    ctx.set_visuals(visuals);
}

/// Frame used for every card on the dashboard.
pub fn card_frame(colors: &ThemeColors) -> Frame {
    Frame::new()
        .fill(colors.surface)
        .corner_radius(CornerRadius::same(UI_CONFIG.layout.card_corner_radius))
        .inner_margin(Margin::same(UI_CONFIG.layout.card_margin))
}

/// Card title followed by a separator.
pub fn card_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.heading(RichText::new(text.into()).strong());
    ui.separator();
    ui.add_space(5.0);
}

/// Number of grid columns that fit the available width.
pub fn grid_columns(available_width: f32) -> usize {
    ((available_width / UI_CONFIG.layout.grid_item_width).floor() as usize).max(1)
}
