//! Lenient field decoding
//!
//! The script serves spreadsheet cells, so a checkbox can come back as `true`,
//! `"TRUE"`, `1` or `"da"`, and an id column as a number. These helpers are used
//! with `#[serde(deserialize_with = ...)]` on the raw wire records.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string or a number, render numbers without a trailing `.0`
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

/// Accept anything; `null` and missing become an empty string
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null)))
}

/// Spreadsheet truthiness
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_bool(&Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null)))
}

/// Number or numeric string; anything else is `None`
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    Ok(match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
        _ => None,
    })
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn value_to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "1" | "da" | "yes" | "x"
        ),
        _ => false,
    }
}
