//! The router's `/search` response, decoded into explicit optional fields.
//!
//! Every field is optional so "absent" stays distinct from "present but empty".
//! Unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::models::lenient;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchReport {
    #[serde(default, deserialize_with = "lenient::field")]
    pub latency_ms: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub parsed: Option<ParsedQuery>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub market_context: Option<MarketContext>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub infrastructure: Option<Infrastructure>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub memory_results: Option<MemoryResults>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub recent_events: Option<RecentEvents>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub related_entities: Option<Vec<Entity>>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub skills: Option<SkillSet>,
}

impl SearchReport {
    /// Decodes a router payload. Anything other than a JSON object is a malformed
    /// root and fails here, before any rendering happens.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "search report must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }
}

/// What the router's parser understood from the free-text query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParsedQuery {
    #[serde(default, deserialize_with = "lenient::field")]
    pub asset_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub sf: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub price: Option<f64>,
    /// Already in percent units (6.5 means 6.5%).
    #[serde(default, deserialize_with = "lenient::field")]
    pub cap_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub intent: Option<String>,
    /// 0.0 – 1.0
    #[serde(default, deserialize_with = "lenient::field")]
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketContext {
    /// 1 | 2 | 3
    #[serde(default, deserialize_with = "lenient::field")]
    pub tier: Option<i64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub state_name: Option<String>,
    /// 0 – 100
    #[serde(default, deserialize_with = "lenient::field")]
    pub heat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub reason: Option<String>,
    /// Fractions (0.055 means 5.5%).
    #[serde(default, deserialize_with = "lenient::field")]
    pub cap_rate_range: Option<(f64, f64)>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub property_tax_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub income_tax: Option<bool>,
}

/// Nearby infrastructure. Element shapes vary per list; only counts are shown.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Infrastructure {
    #[serde(default, deserialize_with = "lenient::list")]
    pub ports: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub rail: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub power: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub last_mile: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub air_cargo: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryResults {
    #[serde(default, deserialize_with = "lenient::field")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub results: Option<Vec<MemoryHit>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryHit {
    #[serde(default, deserialize_with = "lenient::field")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub object_id: Option<String>,
    /// 0.0 – 1.0
    #[serde(default, deserialize_with = "lenient::field")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentEvents {
    #[serde(default, deserialize_with = "lenient::field")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub events: Option<Vec<MarketEvent>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketEvent {
    #[serde(default, deserialize_with = "lenient::field")]
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    #[serde(default, deserialize_with = "lenient::field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub entity_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillSet {
    #[serde(default, deserialize_with = "lenient::list")]
    pub recommended: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub available: Option<Vec<String>>,
}
