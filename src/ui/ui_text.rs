//! User-facing strings. The dashboard is written for a French-speaking staff;
//! the loading and error messages stay in English as the bot logs them.

pub struct UiText {
    pub window_title: &'static str,
    pub dashboard_title: &'static str,
    pub loading: &'static str,
    pub load_error: &'static str,

    pub level_card_title: &'static str,
    pub level_slider_help: &'static str,
    pub level_label: &'static str,

    pub products_title: &'static str,
    pub product_id_prefix: &'static str,
    pub achievements_title: &'static str,
    pub reward_prefix: &'static str,
    pub reward_suffix: &'static str,
    pub trophy_glyph: &'static str,

    pub section_gamification: &'static str,
    pub section_affiliate: &'static str,
    pub section_guild: &'static str,
    pub section_missions: &'static str,
    pub section_transactions: &'static str,
    pub section_profile_cards: &'static str,
    pub section_general: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "ResellBoost Bot Dashboard",
    dashboard_title: "ResellBoost Bot Dashboard",
    loading: "Loading configuration...",
    load_error: "Could not load bot configuration. Please check the console for more details.",

    level_card_title: "Simulateur de Niveau Utilisateur",
    level_slider_help: "Faites glisser pour voir le thème visuel changer en fonction du niveau.",
    level_label: "Niveau: ",

    products_title: "Catalogue de Produits",
    product_id_prefix: "ID: ",
    achievements_title: "Succès",
    reward_prefix: "Récompense: ",
    reward_suffix: " XP",
    trophy_glyph: "🏆",

    section_gamification: "Système de Gamification (config.json)",
    section_affiliate: "Système d'Affiliation (config.json)",
    section_guild: "Système de Guildes (config.json)",
    section_missions: "Système de Missions (config.json)",
    section_transactions: "Journal des Transactions (config.json)",
    section_profile_cards: "Configuration Cartes de Profil (config.json)",
    section_general: "Configuration Générale (config.json)",
};
