use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A color field of a palette: either one CSS color or a list of them
/// (gradients). The first entry of a list is used wherever a single color is
/// needed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    List(Vec<String>),
}

impl ColorValue {
    /// Single-color projection. `None` only for an empty list.
    pub fn primary(&self) -> Option<&str> {
        match self {
            ColorValue::Single(color) => Some(color.as_str()),
            ColorValue::List(colors) => colors.first().map(String::as_str),
        }
    }

    /// A string, or a list made only of strings.
    pub fn from_json(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(color) => Some(ColorValue::Single(color.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(ColorValue::List),
            _ => None,
        }
    }
}

impl From<&str> for ColorValue {
    fn from(color: &str) -> Self {
        ColorValue::Single(color.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Palette {
    pub accent: ColorValue,
    pub background: ColorValue,
    pub surface: ColorValue,
    pub text: ColorValue,
}

impl Palette {
    /// `None` unless all four fields hold usable colors.
    pub fn from_json(raw: &Value) -> Option<Self> {
        let field = |key: &str| raw.get(key).and_then(ColorValue::from_json);
        Some(Self {
            accent: field("accent")?,
            background: field("background")?,
            surface: field("surface")?,
            text: field("text")?,
        })
    }
}

/// A level threshold and the palette unlocked from that level upwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelTier {
    pub level: f64,
    pub palette: Palette,
}

impl LevelTier {
    /// Accepts numeric thresholds and numeric strings (`"10"`).
    pub fn from_json(raw: &Value) -> Option<Self> {
        let level = match raw.get("level")? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        if !level.is_finite() {
            return None;
        }
        let palette = Palette::from_json(raw.get("palette")?)?;
        Some(Self { level, palette })
    }
}

/// Typed view of the `PROFILE_CARD_CONFIG` section.
///
/// Read item by item: an unusable tier is dropped on its own and an unusable
/// default palette only loses the default, the rest of the section still
/// applies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(from = "Value")]
pub struct ProfileCardConfig {
    #[serde(rename = "DEFAULT_PALETTE")]
    pub default_palette: Option<Palette>,
    #[serde(rename = "LEVEL_PALETTES")]
    pub level_palettes: Option<Vec<LevelTier>>,
}

impl From<Value> for ProfileCardConfig {
    fn from(raw: Value) -> Self {
        let default_palette = raw.get("DEFAULT_PALETTE").and_then(|p| {
            let palette = Palette::from_json(p);
            if palette.is_none() && !p.is_null() {
                log::warn!("⚠️  Ignoring unusable DEFAULT_PALETTE");
            }
            palette
        });

        let level_palettes = raw.get("LEVEL_PALETTES").and_then(Value::as_array).map(|tiers| {
            tiers
                .iter()
                .enumerate()
                .filter_map(|(i, tier)| {
                    let parsed = LevelTier::from_json(tier);
                    if parsed.is_none() {
                        log::warn!("⚠️  Ignoring unusable LEVEL_PALETTES[{}]", i);
                    }
                    parsed
                })
                .collect()
        });

        Self {
            default_palette,
            level_palettes,
        }
    }
}

impl ProfileCardConfig {
    pub fn tiers(&self) -> &[LevelTier] {
        self.level_palettes.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_colors_project_to_first_entry() {
        let gradient = ColorValue::List(vec!["#ff0000".into(), "#00ff00".into()]);
        assert_eq!(gradient.primary(), Some("#ff0000"));
        assert_eq!(ColorValue::List(vec![]).primary(), None);
        assert_eq!(ColorValue::from("gold").primary(), Some("gold"));
    }

    #[test]
    fn profile_card_config_parses_mixed_color_shapes() {
        let raw = json!({
            "DEFAULT_PALETTE": {
                "accent": "#3b82f6", "background": "#111827",
                "surface": "#1f2937", "text": "#f9fafb"
            },
            "LEVEL_PALETTES": [{
                "level": 10,
                "palette": {
                    "accent": ["#cd7f32", "#b87333"], "background": "#1c1917",
                    "surface": "#292524", "text": "#fafaf9"
                }
            }]
        });

        let cfg: ProfileCardConfig = serde_json::from_value(raw).unwrap();
        assert!(cfg.default_palette.is_some());
        assert_eq!(cfg.tiers().len(), 1);
        assert_eq!(cfg.tiers()[0].level, 10.0);
        assert_eq!(cfg.tiers()[0].palette.accent.primary(), Some("#cd7f32"));
    }

    #[test]
    fn null_tier_list_means_no_tiers() {
        let cfg: ProfileCardConfig =
            serde_json::from_value(json!({ "LEVEL_PALETTES": null })).unwrap();
        assert!(cfg.tiers().is_empty());
        assert!(cfg.default_palette.is_none());
    }

    fn palette_json(accent: &str) -> Value {
        json!({ "accent": accent, "background": "#000000", "surface": "#111111", "text": "#ffffff" })
    }

    #[test]
    fn one_bad_tier_does_not_discard_the_others() {
        let cfg: ProfileCardConfig = serde_json::from_value(json!({
            "DEFAULT_PALETTE": palette_json("#d00000"),
            "LEVEL_PALETTES": [
                { "level": 5, "palette": { "accent": "#a00000", "background": "#000000", "surface": "#111111" } },
                { "level": 20, "palette": { "accent": 42, "background": "#000000", "surface": "#111111", "text": "#ffffff" } },
                { "level": "abc", "palette": palette_json("#c00000") },
                { "level": 30, "palette": palette_json("#b00000") }
            ]
        }))
        .unwrap();

        assert_eq!(cfg.tiers().len(), 1);
        assert_eq!(cfg.tiers()[0].level, 30.0);
        assert_eq!(cfg.tiers()[0].palette.accent.primary(), Some("#b00000"));
        assert_eq!(
            cfg.default_palette.as_ref().and_then(|p| p.accent.primary()),
            Some("#d00000")
        );
    }

    #[test]
    fn numeric_string_thresholds_are_accepted() {
        let cfg: ProfileCardConfig = serde_json::from_value(json!({
            "LEVEL_PALETTES": [
                { "level": "10", "palette": palette_json("#a00000") },
                { "level": 30, "palette": palette_json("#b00000") }
            ]
        }))
        .unwrap();

        let levels: Vec<f64> = cfg.tiers().iter().map(|t| t.level).collect();
        assert_eq!(levels, vec![10.0, 30.0]);
    }

    #[test]
    fn bad_default_palette_keeps_the_tiers() {
        let cfg: ProfileCardConfig = serde_json::from_value(json!({
            "DEFAULT_PALETTE": "blue",
            "LEVEL_PALETTES": [{ "level": 1, "palette": palette_json("#a00000") }]
        }))
        .unwrap();

        assert!(cfg.default_palette.is_none());
        assert_eq!(cfg.tiers().len(), 1);
    }

    #[test]
    fn colour_lists_must_hold_only_strings() {
        assert_eq!(ColorValue::from_json(&json!(["#fff", 3])), None);
        assert_eq!(ColorValue::from_json(&json!(12)), None);
        assert_eq!(
            ColorValue::from_json(&json!(["#fff"])),
            Some(ColorValue::List(vec!["#fff".into()]))
        );
    }
}
