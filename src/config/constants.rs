//! Configuration constants.
//!
//! This module defines the tuning constants used by the clustering engine, the
//! density shading and the reference rate-limit policies.

use std::time::Duration;

// Geodesy
/// Mean Earth radius in meters used by the haversine formula
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

// Proximity clustering
/// Default base radius of a proximity group in meters
pub const DEFAULT_BASE_RADIUS_METERS: f64 = 200.0;
/// Multiplier applied to the base radius to get the merge threshold.
/// A record joins a group when its distance to the seed is strictly below
/// `base_radius * CLUSTER_OVERLAP_FACTOR`, so adjacent circles merge instead of tiling.
pub const CLUSTER_OVERLAP_FACTOR: f64 = 1.5;

// Density shading
/// Bucket key used for records without a neighborhood
pub const NO_NEIGHBORHOOD_KEY: &str = "SEM BAIRRO";
/// Opacity for 0 or 1 related entities
pub const OPACITY_SPARSE: f64 = 0.3;
/// Opacity for 2 to 5 related entities
pub const OPACITY_LOW: f64 = 0.5;
/// Opacity for 6 to 10 related entities
pub const OPACITY_MEDIUM: f64 = 0.7;
/// Opacity for 11 or more related entities
pub const OPACITY_HIGH: f64 = 0.9;
/// Upper bound (inclusive) of the sparse band
pub const OPACITY_SPARSE_MAX: usize = 1;
/// Upper bound (inclusive) of the low band
pub const OPACITY_LOW_MAX: usize = 5;
/// Upper bound (inclusive) of the medium band
pub const OPACITY_MEDIUM_MAX: usize = 10;

// Rate limiting
/// Refill interval used when a caller does not specify one
pub const DEFAULT_REFILL_INTERVAL: Duration = Duration::from_millis(1000);

// Reference policies: (max tokens, refill rate, refill interval in ms)
/// Primary geocoding provider, kept under its documented 5 req/s cap
pub const GEOCODER_PRIMARY_POLICY: (f64, f64, u64) = (10.0, 3.0, 1000);
/// Secondary geocoding provider, same policy as the primary
pub const GEOCODER_SECONDARY_POLICY: (f64, f64, u64) = (10.0, 3.0, 1000);
/// Fair-use fallback provider (strict 1 req/s)
pub const GEOCODER_FALLBACK_STRICT_POLICY: (f64, f64, u64) = (2.0, 1.0, 1000);
/// Higher-throughput fallback provider
pub const GEOCODER_FALLBACK_BULK_POLICY: (f64, f64, u64) = (20.0, 5.0, 1000);
/// Postal-code lookup provider
pub const POSTAL_LOOKUP_POLICY: (f64, f64, u64) = (5.0, 1.0, 1000);
/// Login attempts: 5 attempts, then 1 every 12s
pub const LOGIN_POLICY: (f64, f64, u64) = (5.0, 1.0, 12_000);
/// Public registration submissions: 3, then 1 every 20s
pub const PUBLIC_REGISTRATION_POLICY: (f64, f64, u64) = (3.0, 1.0, 20_000);
