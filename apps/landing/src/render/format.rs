//! Display formatters. Each takes a possibly-absent value and returns `None`
//! ("omit") when there is nothing sensible to show, so callers can skip the tag
//! entirely. Non-finite arithmetic results are treated as absent.

/// Fixed-point rendering with `decimals` places, ties rounded away from zero
/// (`1.25 → "1.3"`). `None` for NaN/infinity. Negative zero prints as plain zero.
pub fn fixed(value: f64, decimals: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    let value = if rounded.is_finite() { rounded } else { value };
    let text = format!("{value:.decimals$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => Some(rest.to_string()),
        _ => Some(text),
    }
}

/// Shortest natural rendering of a number (`7` for 7.0, `6.5` for 6.5).
pub fn number(value: Option<f64>) -> Option<String> {
    let value = value.filter(|v| v.is_finite())?;
    if value == 0.0 {
        return Some("0".to_string());
    }
    Some(format!("{value}"))
}

/// `2_500_000 → "$2.5M"`
pub fn currency_millions(price: Option<f64>) -> Option<String> {
    fixed(price? / 1e6, 1).map(|m| format!("${m}M"))
}

/// `45_000 → "45K SF"`
pub fn area_thousands(sf: Option<f64>) -> Option<String> {
    fixed(sf? / 1000.0, 0).map(|k| format!("{k}K SF"))
}

/// Fraction to percent: `percent(Some(0.0181), 2) → "1.81%"`.
///
/// Decimal places by caller: 0 for confidence and scores, 1 for cap-rate range
/// bounds, 2 for tax rates.
pub fn percent(rate: Option<f64>, decimals: usize) -> Option<String> {
    fixed(rate? * 100.0, decimals).map(|p| format!("{p}%"))
}

/// A value already in percent units: `6.5 → "6.5%"`.
pub fn plain_percent(value: Option<f64>) -> Option<String> {
    number(value).map(|p| format!("{p}%"))
}

/// Enum-like identifiers to words: `"industrial_warehouse" → "industrial warehouse"`.
/// Empty strings are omitted.
pub fn label_case(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.replace('_', " "))
}

/// Non-empty string passthrough.
pub fn text(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Keeps `s` if it has at most `max_chars` characters, otherwise cuts it to
/// `max_chars` and appends an ellipsis. Counts characters, not bytes.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &s[..cut]),
        None => s.to_string(),
    }
}

/// `count_noun(12, "match", "matches") → "12 matches"`
pub fn count_noun(count: u64, singular: &str, plural: &str) -> String {
    let noun = if count != 1 { plural } else { singular };
    format!("{count} {noun}")
}
