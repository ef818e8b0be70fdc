//! Small helpers for pulling display values out of schema-less JSON.

use serde_json::Value;

/// Renders a scalar for display. Strings are returned without quotes,
/// numbers and booleans use their JSON spelling, everything else is empty.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// `scalar_text` of `obj[key]`, or an empty string when the key is missing.
pub fn field_text(obj: &Value, key: &str) -> String {
    obj.get(key).map(scalar_text).unwrap_or_default()
}

/// Returns the string at `obj[key]` only if it is a non-empty string.
pub fn non_empty_str<'a>(obj: &'a Value, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// JavaScript truthiness: `null`, `false`, `0` and `""` are falsy; every
/// array and object (even empty) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
