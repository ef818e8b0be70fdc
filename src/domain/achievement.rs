use serde::Deserialize;
use serde_json::Value;

use crate::utils::field_text;

/// An unlockable achievement. Display-only; fields are read leniently like
/// [`crate::domain::Product`].
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(from = "Value")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub reward_xp: String,
}

impl From<Value> for Achievement {
    fn from(raw: Value) -> Self {
        Self {
            id: field_text(&raw, "id"),
            name: field_text(&raw, "name"),
            description: field_text(&raw, "description"),
            reward_xp: field_text(&raw, "reward_xp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_numeric_reward() {
        let a: Achievement = serde_json::from_value(json!({
            "id": "first_sale",
            "name": "Première vente",
            "description": "Réaliser un premier achat",
            "reward_xp": 150
        }))
        .unwrap();
        assert_eq!(a.reward_xp, "150");
        assert_eq!(a.name, "Première vente");
    }

    #[test]
    fn list_requires_an_array() {
        assert!(serde_json::from_value::<Vec<Achievement>>(json!({ "id": "x" })).is_err());
    }
}
