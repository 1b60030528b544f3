//! Coordinate coercion.
//!
//! Source data carries coordinates either as JSON numbers or as numeric
//! strings. Every ingestion point goes through [`parse_coordinate`].

use serde::{Deserialize, Serialize};

/// A raw coordinate as it appears in source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    /// JSON number
    Number(f64),
    /// Numeric string, possibly padded with whitespace
    Text(String),
}

impl From<f64> for CoordinateValue {
    fn from(value: f64) -> Self {
        CoordinateValue::Number(value)
    }
}

impl From<&str> for CoordinateValue {
    fn from(value: &str) -> Self {
        CoordinateValue::Text(value.to_string())
    }
}

/// Coerces a raw coordinate into a finite `f64`.
///
/// Returns `None` for blank or non-numeric strings and for NaN/infinite values.
/// Never substitutes a default.
pub fn parse_coordinate(value: &CoordinateValue) -> Option<f64> {
    let parsed = match value {
        CoordinateValue::Number(n) => *n,
        CoordinateValue::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    parsed.is_finite().then_some(parsed)
}
