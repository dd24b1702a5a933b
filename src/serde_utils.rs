//! Shared serialization utilities.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a monetary amount the API encodes either as a JSON number or
/// as a decimal string. Null is treated as zero.
pub fn float_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("number out of f64 range")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom("invalid float string")),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!(
            "expected number or string, got {other}"
        ))),
    }
}
