use serde::Deserialize;
use serde_json::{Map, Value};

use crate::utils::{field_text, non_empty_str, scalar_text};

/// One variant of a variably-priced product. `price` feeds the price label;
/// `label` (or `name`) from the remaining keys is shown under it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductOption {
    /// `None` when the option has no numeric price.
    pub price: Option<f64>,
    pub extra: Map<String, Value>,
}

/// A catalog entry.
///
/// Built leniently from whatever the products document contains: a field
/// with the wrong type is treated as missing, so one bad entry never fails
/// the whole catalog.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(from = "Value")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub currency: Option<String>,
    pub price: Option<f64>,
    pub price_text: Option<String>,
    pub options: Option<Vec<ProductOption>>,
}

impl From<Value> for Product {
    fn from(raw: Value) -> Self {
        let options = raw.get("options").and_then(Value::as_array).map(|opts| {
            opts.iter()
                .map(|opt| ProductOption {
                    price: opt.get("price").and_then(Value::as_f64),
                    extra: opt
                        .as_object()
                        .map(|o| {
                            o.iter()
                                .filter(|(k, _)| k.as_str() != "price")
                                .map(|(k, v)| (k.clone(), v.clone()))
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect()
        });

        Self {
            id: field_text(&raw, "id"),
            name: field_text(&raw, "name"),
            description: field_text(&raw, "description"),
            category: field_text(&raw, "category"),
            currency: non_empty_str(&raw, "currency").map(str::to_string),
            price: raw.get("price").and_then(Value::as_f64),
            price_text: non_empty_str(&raw, "price_text").map(str::to_string),
            options,
        }
    }
}

impl ProductOption {
    /// Display name of the option, from `label` or else `name`.
    pub fn label(&self) -> Option<String> {
        ["label", "name"]
            .iter()
            .filter_map(|key| self.extra.get(*key))
            .map(scalar_text)
            .find(|text| !text.is_empty())
    }
}

impl Product {
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}

pub const DEFAULT_CURRENCY: &str = "EUR";
