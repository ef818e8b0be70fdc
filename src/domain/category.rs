use strum_macros::EnumIter;

/// Icon family shown next to a product name, chosen from its category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum CategoryIcon {
    DiscordServices,
    Books,
    Accounts,
    Gaming,
    Software,
    Creative,
    Logs,
    SocialBoost,
    Suppliers,
    Package,
}

impl CategoryIcon {
    pub fn for_category(category: &str) -> Self {
        match category {
            "Services & Avantages Discord" => CategoryIcon::DiscordServices,
            "Ebooks & Guides" | "Formations" => CategoryIcon::Books,
            "Comptes Premium" | "Services Financiers" => CategoryIcon::Accounts,
            "Gaming - Outils" | "Gaming - Monnaie Virtuelle" => CategoryIcon::Gaming,
            "Panels" | "Outils & Logiciels" => CategoryIcon::Software,
            "Services de Création" => CategoryIcon::Creative,
            "Logs" => CategoryIcon::Logs,
            "Boost Réseaux Sociaux" => CategoryIcon::SocialBoost,
            "Fournisseurs & Accès Exclusifs" => CategoryIcon::Suppliers,
            _ => CategoryIcon::Package,
        }
    }

    /// Glyph drawn with egui's bundled emoji font.
    pub fn glyph(self) -> &'static str {
        match self {
            CategoryIcon::DiscordServices => "✨",
            CategoryIcon::Books => "📖",
            CategoryIcon::Accounts => "💳",
            CategoryIcon::Gaming => "🎮",
            CategoryIcon::Software => "🛠",
            CategoryIcon::Creative => "🎨",
            CategoryIcon::Logs => "📈",
            CategoryIcon::SocialBoost => "👥",
            CategoryIcon::Suppliers => "🏪",
            CategoryIcon::Package => "📦",
        }
    }
}
