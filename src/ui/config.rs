use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// Fixed colors that do not follow the level palette
#[derive(Clone, Copy)]
pub struct UiColors {
    pub gold: Color32,
    pub danger: Color32,
    pub text_secondary: Color32,
}

/// Card layout settings
#[derive(Clone, Copy)]
pub struct UiLayout {
    pub card_corner_radius: u8,
    pub card_margin: i8,
    pub card_spacing: f32,
    pub grid_item_width: f32,
    pub max_content_width: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub layout: UiLayout,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        gold: Color32::from_rgb(251, 191, 36),
        danger: Color32::from_rgb(239, 68, 68),
        text_secondary: Color32::from_rgb(156, 163, 175),
    },
    layout: UiLayout {
        card_corner_radius: 8,
        card_margin: 16,
        card_spacing: 16.0,
        grid_item_width: 280.0,
        max_content_width: 1200.0,
    },
};
