//! Field deserializers that tolerate badly typed source data.
//!
//! Exported registrations are hand-edited spreadsheets more often than not. A
//! single record with `"latitude": true` or a numeric id must not make the
//! whole file unreadable; such fields degrade to "absent" instead.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::coordinate::CoordinateValue;

/// Numbers and strings are kept as raw coordinates; any other JSON type reads
/// as a missing coordinate.
pub(crate) fn coordinate<'de, D>(deserializer: D) -> Result<Option<CoordinateValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().map(CoordinateValue::Number),
        Value::String(s) => Some(CoordinateValue::Text(s)),
        _ => None,
    })
}

/// Strings are kept and numbers are stringified; anything else reads as
/// missing.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Record ids may be strings or numbers. A record without a usable id is still
/// an error.
pub(crate) fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number id, found {other}"
        ))),
    }
}
