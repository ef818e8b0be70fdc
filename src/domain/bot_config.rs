//! The general bot configuration document (`config.json`).
//!
//! Only a handful of top-level sections get dedicated cards; every other key
//! is kept verbatim in [`BotConfig::general`] so nothing in the document is
//! ever dropped on the way to the screen.
//!
//! A recognised key is always taken out of the residual, but its card is only
//! shown when the value is truthy in the JavaScript sense: `null`, `false`,
//! `0` and `""` are present in the document yet get no card.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::palette::ProfileCardConfig;
use crate::utils::is_truthy;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BotConfig {
    #[serde(rename = "GAMIFICATION_CONFIG", default, skip_serializing_if = "Option::is_none")]
    pub gamification: Option<Value>,
    #[serde(rename = "MISSION_SYSTEM", default, skip_serializing_if = "Option::is_none")]
    pub mission_system: Option<Value>,
    #[serde(rename = "TRANSACTION_LOG_CONFIG", default, skip_serializing_if = "Option::is_none")]
    pub transaction_log: Option<Value>,
    #[serde(rename = "PROFILE_CARD_CONFIG", default, skip_serializing_if = "Option::is_none")]
    pub profile_card: Option<Value>,

    /// Residual keys, in document order.
    #[serde(flatten)]
    pub general: Map<String, Value>,
}

/// The inspection cards shown for the configuration, in display order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum SectionKind {
    Gamification,
    AffiliateSystem,
    GuildSystem,
    MissionSystem,
    TransactionLog,
    ProfileCard,
    General,
}

/// One configuration card: which section it is and its pretty-printed body.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSection {
    pub kind: SectionKind,
    pub body: String,
}

impl BotConfig {
    pub fn affiliate_system(&self) -> Option<&Value> {
        self.gamification_subsection("AFFILIATE_SYSTEM")
    }

    pub fn guild_system(&self) -> Option<&Value> {
        self.gamification_subsection("GUILD_SYSTEM")
    }

    fn gamification_subsection(&self, key: &str) -> Option<&Value> {
        self.gamification
            .as_ref()
            .and_then(|g| g.get(key))
            .filter(|v| is_truthy(v))
    }

    /// Raw value behind a named section. `General` is not a single value and
    /// always returns `None` here; use [`BotConfig::general`].
    pub fn section(&self, kind: SectionKind) -> Option<&Value> {
        let value = match kind {
            SectionKind::Gamification => self.gamification.as_ref(),
            SectionKind::AffiliateSystem => return self.affiliate_system(),
            SectionKind::GuildSystem => return self.guild_system(),
            SectionKind::MissionSystem => self.mission_system.as_ref(),
            SectionKind::TransactionLog => self.transaction_log.as_ref(),
            SectionKind::ProfileCard => self.profile_card.as_ref(),
            SectionKind::General => None,
        };
        value.filter(|v| is_truthy(v))
    }

    /// Typed palette configuration, read tier by tier (see
    /// [`ProfileCardConfig`]). `None` only when the section is missing or falsy.
    pub fn profile_card_config(&self) -> Option<ProfileCardConfig> {
        self.section(SectionKind::ProfileCard)
            .cloned()
            .map(ProfileCardConfig::from)
    }

    /// Every card to display: present named sections first, then the
    /// residual keys, which always get a card (possibly `{}`).
    pub fn sections(&self) -> Vec<ConfigSection> {
        use strum::IntoEnumIterator;

        SectionKind::iter()
            .filter_map(|kind| {
                let body = match kind {
                    SectionKind::General => pretty(&self.general),
                    _ => pretty(self.section(kind)?),
                };
                Some(ConfigSection { kind, body })
            })
            .collect()
    }
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> BotConfig {
        serde_json::from_value(json!({
            "BOT_NAME": "ResellBoost",
            "GAMIFICATION_CONFIG": {
                "XP_PER_MESSAGE": 5,
                "AFFILIATE_SYSTEM": { "COMMISSION_RATE": 0.1 },
                "GUILD_SYSTEM": null
            },
            "MISSION_SYSTEM": { "DAILY": 3 },
            "TRANSACTION_LOG_CONFIG": null,
            "CHANNELS": { "logs": "123" }
        }))
        .unwrap()
    }

    #[test]
    fn recognised_sections_are_split_from_the_residual() {
        let cfg = sample();
        assert!(cfg.gamification.is_some());
        assert!(cfg.mission_system.is_some());
        assert!(cfg.transaction_log.is_none());
        assert!(cfg.profile_card.is_none());

        let residual: Vec<&str> = cfg.general.keys().map(String::as_str).collect();
        assert_eq!(residual, vec!["BOT_NAME", "CHANNELS"]);
    }

    #[test]
    fn nested_systems_come_from_gamification() {
        let cfg = sample();
        assert_eq!(cfg.affiliate_system(), Some(&json!({ "COMMISSION_RATE": 0.1 })));
        assert_eq!(cfg.guild_system(), None);
    }

    #[test]
    fn sections_list_present_cards_then_general() {
        let kinds: Vec<SectionKind> = sample().sections().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Gamification,
                SectionKind::AffiliateSystem,
                SectionKind::MissionSystem,
                SectionKind::General,
            ]
        );
    }

    #[test]
    fn empty_document_still_has_a_general_card() {
        let cfg: BotConfig = serde_json::from_value(json!({})).unwrap();
        let sections = cfg.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::General);
        assert_eq!(sections[0].body, "{}");
    }

    #[test]
    fn malformed_tier_list_leaves_an_empty_profile_card_config() {
        let cfg: BotConfig =
            serde_json::from_value(json!({ "PROFILE_CARD_CONFIG": { "LEVEL_PALETTES": 7 } }))
                .unwrap();
        let profile = cfg.profile_card_config().unwrap();
        assert!(profile.tiers().is_empty());
        assert!(profile.default_palette.is_none());
    }

    #[test]
    fn falsy_sections_are_kept_out_of_residual_but_get_no_card() {
        let cfg: BotConfig = serde_json::from_value(json!({
            "GAMIFICATION_CONFIG": { "AFFILIATE_SYSTEM": 0, "GUILD_SYSTEM": "" },
            "MISSION_SYSTEM": false,
            "TRANSACTION_LOG_CONFIG": "",
            "PROFILE_CARD_CONFIG": 0,
            "BOT_NAME": "x"
        }))
        .unwrap();

        assert_eq!(cfg.general.len(), 1);
        assert!(cfg.profile_card_config().is_none());

        let kinds: Vec<SectionKind> = cfg.sections().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Gamification, SectionKind::General]);
    }

    #[test]
    fn empty_containers_still_count_as_present() {
        let cfg: BotConfig =
            serde_json::from_value(json!({ "MISSION_SYSTEM": {}, "TRANSACTION_LOG_CONFIG": [] }))
                .unwrap();
        assert!(cfg.section(SectionKind::MissionSystem).is_some());
        assert!(cfg.section(SectionKind::TransactionLog).is_some());
    }
}
