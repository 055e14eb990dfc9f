//! Strict numeric fields for request payloads
//!
//! Storefront clients send numbers either as JSON numbers or as numeric
//! strings taken straight from form inputs. Both are accepted; any other JSON
//! type, or a string that does not parse, is rejected instead of silently
//! becoming `0`.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` on `Option` fields so
//! that an absent field stays `None`.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional finite number from a JSON number or numeric string
pub fn option_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(de::Error::custom(format!("expected a number, got {value}"))),
    }
}

/// Deserialize an optional integer from a JSON number or numeric string
///
/// Floats are accepted only when they have no fractional part (`3.0`).
pub fn option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let integer = match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };

    integer
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("expected an integer, got {value}")))
}

fn integral(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64).then_some(n as i64)
}
