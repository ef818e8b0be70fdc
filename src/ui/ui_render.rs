use eframe::egui::{
    Align, CentralPanel, Context, Frame, Grid, Layout, Margin, RichText, ScrollArea, Slider, Ui,
};

use crate::config::LEVEL_RANGE;
use crate::domain::{Achievement, CategoryIcon, ConfigSection, Product, SectionKind, option_summary};
use crate::engine::{LoadState, ReadyState};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{ThemeColors, card_frame, card_heading, grid_columns};

use super::app::DashboardApp;

impl DashboardApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let panel_frame = Frame::new()
            .fill(self.theme_colors.background)
            .inner_margin(Margin::same(UI_CONFIG.layout.card_margin));

        CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                ui.set_max_width(UI_CONFIG.layout.max_content_width);
                self.render_state(ui);
            });
        });
    }

    fn render_state(&mut self, ui: &mut Ui) {
        if self.engine.ready().is_some() {
            self.render_ready(ui);
            return;
        }

        let colors = self.theme_colors;
        card_frame(&colors).show(ui, |ui| {
            ui.set_width(ui.available_width());
            match self.engine.state() {
                LoadState::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(UI_TEXT.loading);
                    });
                }
                LoadState::Error(_) => ui.label_error(UI_TEXT.load_error),
                LoadState::Ready(_) => {}
            }
        });
    }

    fn render_ready(&mut self, ui: &mut Ui) {
        let colors = self.theme_colors;

        ui.heading(RichText::new(UI_TEXT.dashboard_title).size(28.0).strong());
        ui.add_space(UI_CONFIG.layout.card_spacing);

        let mut level = self.engine.level();
        render_level_card(ui, &colors, &mut level);
        self.engine.set_level(level);

        let Some(ready) = self.engine.ready() else {
            return;
        };
        render_ready_cards(ui, &colors, ready);
    }
}

fn render_ready_cards(ui: &mut Ui, colors: &ThemeColors, ready: &ReadyState) {
    let spacing = UI_CONFIG.layout.card_spacing;

    ui.add_space(spacing);
    render_products_card(ui, colors, &ready.documents.products, &ready.price_labels);
    ui.add_space(spacing);
    render_achievements_card(ui, colors, &ready.documents.achievements);

    for section in &ready.sections {
        ui.add_space(spacing);
        render_json_card(ui, colors, section);
    }
    ui.add_space(spacing);
}

fn render_level_card(ui: &mut Ui, colors: &ThemeColors, level: &mut u32) {
    card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_heading(ui, UI_TEXT.level_card_title);
        ui.label_subdued(UI_TEXT.level_slider_help);
        ui.add_space(5.0);

        ui.spacing_mut().slider_width = ui.available_width() - 16.0;
        ui.add(Slider::new(level, LEVEL_RANGE).show_value(false))
            .on_hover_text("Simulate user level");

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(UI_TEXT.level_label).size(20.0).strong());
                ui.label(
                    RichText::new(level.to_string())
                        .size(20.0)
                        .strong()
                        .color(colors.accent),
                );
            });
        });
    });
}

fn render_products_card(ui: &mut Ui, colors: &ThemeColors, products: &[Product], labels: &[String]) {
    card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_heading(ui, UI_TEXT.products_title);

        let columns = grid_columns(ui.available_width());
        Grid::new("products_grid")
            .num_columns(columns)
            .spacing([UI_CONFIG.layout.card_spacing, UI_CONFIG.layout.card_spacing])
            .show(ui, |ui| {
                for (i, (product, label)) in products.iter().zip(labels).enumerate() {
                    render_product(ui, colors, product, label);
                    if (i + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn render_product(ui: &mut Ui, colors: &ThemeColors, product: &Product, price_label: &str) {
    let width = UI_CONFIG.layout.grid_item_width - UI_CONFIG.layout.card_spacing;

    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            ui.label_tag(&product.category, colors.accent);
            ui.horizontal(|ui| {
                let icon = CategoryIcon::for_category(&product.category);
                ui.label(RichText::new(icon.glyph()).size(20.0).color(colors.accent));
                ui.label(RichText::new(&product.name).strong().size(16.0));
            });
            ui.label_subdued(&product.description);
            ui.add_space(5.0);
            ui.label(RichText::new(price_label).strong().size(18.0).color(colors.accent));
            if product.price_text.is_none() {
                let currency = product.currency_or_default();
                for option in product.options.as_deref().unwrap_or_default() {
                    ui.label_small_subdued(option_summary(option, currency));
                }
            }
            ui.label_small_subdued(format!("{}{}", UI_TEXT.product_id_prefix, product.id));
        });
    });
}

fn render_achievements_card(ui: &mut Ui, colors: &ThemeColors, achievements: &[Achievement]) {
    card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_heading(ui, UI_TEXT.achievements_title);

        let columns = grid_columns(ui.available_width());
        let width = UI_CONFIG.layout.grid_item_width - UI_CONFIG.layout.card_spacing;
        let gold = UI_CONFIG.colors.gold;

        Grid::new("achievements_grid")
            .num_columns(columns)
            .spacing([UI_CONFIG.layout.card_spacing, UI_CONFIG.layout.card_spacing])
            .show(ui, |ui| {
                for (i, achievement) in achievements.iter().enumerate() {
                    Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(width);
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(UI_TEXT.trophy_glyph).size(20.0).color(gold));
                                ui.label(RichText::new(&achievement.name).strong().color(gold));
                            });
                            ui.label_subdued(&achievement.description);
                            ui.add_space(5.0);
                            let reward = format!("{}{}", achievement.reward_xp, UI_TEXT.reward_suffix);
                            ui.metric(UI_TEXT.reward_prefix, &reward, colors.text_primary);
                        });
                    });
                    if (i + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn render_json_card(ui: &mut Ui, colors: &ThemeColors, section: &ConfigSection) {
    card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_heading(ui, section_title(section.kind));
        ScrollArea::horizontal()
            .id_salt(section_title(section.kind))
            .show(ui, |ui| {
                ui.label(RichText::new(&section.body).monospace());
            });
    });
}

pub fn section_title(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Gamification => UI_TEXT.section_gamification,
        SectionKind::AffiliateSystem => UI_TEXT.section_affiliate,
        SectionKind::GuildSystem => UI_TEXT.section_guild,
        SectionKind::MissionSystem => UI_TEXT.section_missions,
        SectionKind::TransactionLog => UI_TEXT.section_transactions,
        SectionKind::ProfileCard => UI_TEXT.section_profile_cards,
        SectionKind::General => UI_TEXT.section_general,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn every_section_has_a_distinct_title() {
        let titles: HashSet<&str> = SectionKind::iter().map(section_title).collect();
        assert_eq!(titles.len(), SectionKind::iter().count());
    }
}
