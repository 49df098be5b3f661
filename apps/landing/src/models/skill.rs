use serde::Deserialize;
use serde_json::Value;

use crate::models::lenient;

/// One entry of the router's skill catalog (`GET /skills`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillDescriptor {
    #[serde(default, deserialize_with = "lenient::field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub role: Option<String>,
}

/// Decodes the skill catalog. The router answers either `{"skills": [...]}` or a
/// bare array; anything else is an error. Entries that are not objects are dropped.
pub fn decode_catalog(value: Value) -> Result<Vec<SkillDescriptor>, serde_json::Error> {
    let list = match value {
        Value::Object(mut map) => match map.remove("skills") {
            Some(skills) if !skills.is_null() => skills,
            _ => Value::Object(map),
        },
        other => other,
    };

    let Value::Array(items) = list else {
        return Err(serde::de::Error::custom(
            "skill catalog must be an array or an object with a `skills` array",
        ));
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
