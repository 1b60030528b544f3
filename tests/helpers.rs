// Shared test helpers for building registration fixtures.

use campaign_map::{CoordinateValue, GeoRecord};
use std::io::Write;
use tempfile::NamedTempFile;

/// Meters per degree of latitude on the haversine sphere.
#[allow(dead_code)] // Used by other test files
pub const METERS_PER_DEGREE: f64 = 111_194.93;

/// Builds a record with numeric coordinates.
#[allow(dead_code)] // Used by other test files
pub fn record(id: &str, lat: f64, lon: f64) -> GeoRecord {
    GeoRecord::new(id, None, lat, lon)
}

/// Builds a record whose coordinates are missing.
#[allow(dead_code)] // Used by other test files
pub fn record_without_coordinates(id: &str, neighborhood: Option<&str>) -> GeoRecord {
    GeoRecord {
        id: id.to_string(),
        neighborhood: neighborhood.map(str::to_string),
        latitude: None,
        longitude: Some(CoordinateValue::Text(String::new())),
    }
}

/// Writes `contents` to a temporary JSON file.
#[allow(dead_code)] // Used by other test files
pub fn json_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}
