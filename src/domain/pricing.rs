//! Human-readable price labels for catalog entries.

use crate::domain::product::{Product, ProductOption};

pub const PRICE_VARIABLE: &str = "Prix variable";
pub const PRICE_ON_REQUEST: &str = "Prix sur demande";

/// Formats the price label of a product. Never fails: data that cannot be
/// priced degrades to one of the fixed fallback labels.
///
/// Priority: explicit `price_text`, then the cheapest of `options`, then a
/// non-negative `price`, then "on request".
pub fn format_price(product: &Product) -> String {
    let currency = product.currency_or_default();

    if let Some(text) = product.price_text.as_deref().filter(|t| !t.is_empty()) {
        return text.to_string();
    }

    if let Some(options) = product.options.as_deref().filter(|o| !o.is_empty()) {
        return match cheapest(options.iter().map(|opt| opt.price)) {
            Some(min) => format!("À partir de {:.2} {}", min, currency),
            None => PRICE_VARIABLE.to_string(),
        };
    }

    match product.price {
        Some(price) if price >= 0.0 => format!("{:.2} {}", price, currency),
        _ => PRICE_ON_REQUEST.to_string(),
    }
}

/// One line per option for the product card, e.g. `"1 mois · 3.50 EUR"`.
/// An option without a usable price shows the variable-price label.
pub fn option_summary(option: &ProductOption, currency: &str) -> String {
    let price = match option.price.filter(|p| p.is_finite()) {
        Some(price) => format!("{:.2} {}", price, currency),
        None => PRICE_VARIABLE.to_string(),
    };
    match option.label() {
        Some(label) => format!("{} · {}", label, price),
        None => price,
    }
}

/// Minimum of the prices, or `None` if any of them is missing or not finite.
fn cheapest(mut prices: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    prices
        .try_fold(f64::INFINITY, |min, price| {
            price.filter(|p| p.is_finite()).map(|p| min.min(p))
        })
        .filter(|min| min.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn product(raw: Value) -> Product {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn price_text_wins_over_everything() {
        let p = product(json!({
            "price_text": "Sur devis",
            "price": 10,
            "options": [{ "price": 1 }],
            "currency": "USD"
        }));
        assert_eq!(format_price(&p), "Sur devis");
    }

    #[test]
    fn empty_price_text_falls_through() {
        let p = product(json!({ "price_text": "", "price": 3 }));
        assert_eq!(format_price(&p), "3.00 EUR");
    }

    #[test]
    fn options_show_cheapest_variant() {
        let p = product(json!({
            "currency": "USD",
            "options": [{ "price": 10 }, { "price": 5 }, { "price": 20 }]
        }));
        assert_eq!(format_price(&p), "À partir de 5.00 USD");
    }

    #[test]
    fn non_numeric_option_price_is_variable() {
        let p = product(json!({ "options": [{ "price": 10 }, { "price": "cinq" }] }));
        assert_eq!(format_price(&p), PRICE_VARIABLE);

        let missing = product(json!({ "options": [{ "label": "x" }] }));
        assert_eq!(format_price(&missing), PRICE_VARIABLE);
    }

    #[test]
    fn empty_options_fall_back_to_price() {
        let p = product(json!({ "options": [], "price": 2.5, "currency": "GBP" }));
        assert_eq!(format_price(&p), "2.50 GBP");
    }

    #[test]
    fn single_price_defaults_to_euro() {
        assert_eq!(format_price(&product(json!({ "price": 9.5 }))), "9.50 EUR");
        assert_eq!(format_price(&product(json!({ "price": 0 }))), "0.00 EUR");
    }

    #[test]
    fn option_lines_show_label_and_own_price() {
        let p = product(json!({
            "currency": "USD",
            "options": [{ "label": "1 mois", "price": 3.5 }, { "label": "Sur mesure" }, { "price": 8 }]
        }));
        let lines: Vec<String> = p
            .options
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|opt| option_summary(opt, p.currency_or_default()))
            .collect();
        assert_eq!(lines, vec!["1 mois · 3.50 USD", "Sur mesure · Prix variable", "8.00 USD"]);
    }

    #[test]
    fn negative_or_missing_price_is_on_request() {
        assert_eq!(format_price(&product(json!({ "price": -1 }))), PRICE_ON_REQUEST);
        assert_eq!(format_price(&product(json!({ "name": "x" }))), PRICE_ON_REQUEST);
        assert_eq!(format_price(&product(json!(null))), PRICE_ON_REQUEST);
    }
}
