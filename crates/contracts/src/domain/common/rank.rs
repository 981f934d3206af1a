//! Lenient decoding of rank fields.
//!
//! Ranks come from hand-edited admin forms, so the backend may send `3`,
//! `3.0`, `"3"`, `""`, `null` or leave the field out. Anything that is not a
//! whole number becomes `None` and is ordered by the missing-rank fallback of
//! whoever consumes it. A bad rank never fails the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional rank, mapping malformed values to `None`.
///
/// Use together with `#[serde(default)]` so that an absent field works too.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(rank_from_value(&value))
}

fn rank_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64().and_then(whole_number)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    }
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Rank used for ordering: the explicit value, or `fallback` when missing.
pub fn effective_rank(rank: Option<i64>, fallback: i64) -> i64 {
    rank.unwrap_or(fallback)
}
