use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders text in the secondary (muted) text color.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders small secondary text (ids, footnotes).
    fn label_small_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair; the label is subdued, the value strong and colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a small uppercase tag (product category).
    fn label_tag(&mut self, text: impl Into<String>, color: Color32);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.text_secondary));
    }

    fn label_small_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.text_secondary));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(label);
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_tag(&mut self, text: impl Into<String>, color: Color32) {
        let text = text.into().to_uppercase();
        self.label(RichText::new(text).small().color(color));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.danger));
    }
}
