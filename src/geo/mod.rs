//! Geographic primitives shared by the clustering and density modules.
//!
//! This module provides the point and record types, the single coordinate
//! coercion helper, and haversine distance.

mod coordinate;
mod distance;
pub(crate) mod lenient;
mod types;

// Re-export public API
pub use coordinate::{parse_coordinate, CoordinateValue};
pub use distance::{centroid, haversine_distance};
pub use types::{GeoPoint, GeoRecord};
