//! Geographic data structures.

use serde::{Deserialize, Serialize};

use super::coordinate::{parse_coordinate, CoordinateValue};
use super::lenient;

/// A point on the Earth's surface in decimal degrees.
///
/// Both components are always finite. Use [`GeoPoint::new`] to build one from
/// untrusted values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point, or `None` if either component is NaN or infinite.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite() && longitude.is_finite() {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// A geo-tagged record owned by the data layer (e.g. a registration).
///
/// Coordinates are kept as they arrived (number, numeric string or absent) and
/// are only coerced on read through [`GeoRecord::point`]. Coordinates of any
/// other JSON type deserialize as absent, and a numeric id is stringified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    /// Record identity
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    /// Categorical key used for density buckets
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub neighborhood: Option<String>,
    /// Raw latitude
    #[serde(default, deserialize_with = "lenient::coordinate")]
    pub latitude: Option<CoordinateValue>,
    /// Raw longitude
    #[serde(default, deserialize_with = "lenient::coordinate")]
    pub longitude: Option<CoordinateValue>,
}

impl GeoRecord {
    /// Creates a record with numeric coordinates.
    pub fn new(
        id: impl Into<String>,
        neighborhood: Option<&str>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            neighborhood: neighborhood.map(str::to_string),
            latitude: Some(CoordinateValue::Number(latitude)),
            longitude: Some(CoordinateValue::Number(longitude)),
        }
    }

    /// Returns the record's location, or `None` if either coordinate is
    /// missing, non-numeric or non-finite.
    pub fn point(&self) -> Option<GeoPoint> {
        let latitude = parse_coordinate(self.latitude.as_ref()?)?;
        let longitude = parse_coordinate(self.longitude.as_ref()?)?;
        GeoPoint::new(latitude, longitude)
    }
}
