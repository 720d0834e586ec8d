//! Utility functions for `orderdash`

use serde::{Deserialize, Deserializer};

/// Decode a monetary amount or quantity, mapping anything that is not a
/// finite non-negative number (absent, `null`, strings, negatives) to 0.
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a value at all.
pub fn lenient_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0))
}

/// Decode an optional string, mapping `null` to the empty string.
///
/// # Errors
///
/// Fails when the value is present but not a string.
pub fn string_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Round to the nearest integer, halves rounding up.
///
/// Meant for the non-negative amounts produced by [`lenient_amount`]; a
/// negative half rounds away from zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    value.round() as i64
}

/// Format an amount with two decimals behind a currency symbol.
#[must_use]
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if symbol.is_empty() {
        format!("{amount:.2}")
    } else {
        format!("{symbol} {amount:.2}")
    }
}

/// Case-insensitive substring test; `needle` must already be lower-cased.
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}
