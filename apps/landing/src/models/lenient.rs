//! Lenient field decoding for router payloads.
//!
//! The router's response shape is a loose contract. A field carrying the wrong
//! JSON type decodes as absent instead of failing the whole report, so one
//! malformed value only costs its own tag.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Decodes an optional field. `null` or a value of the wrong type becomes `None`.
pub fn field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decodes a display-only text field. Numbers and booleans are kept as their
/// JSON text (`2 → "2"`); any other non-string value becomes `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Decodes an optional list. A non-array value becomes `None`; elements that
/// fail to decode are dropped, the rest are kept in order.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}
