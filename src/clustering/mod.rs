//! Map aggregation: proximity clustering and neighborhood density.
//!
//! Both halves are pure functions over a borrowed slice of [`GeoRecord`]s.
//! Nothing is cached between calls and nothing is written back to the input.
//!
//! [`GeoRecord`]: crate::geo::GeoRecord

mod density;
mod proximity;

// Re-export public API
pub use density::{
    count_by_key, density_buckets, group_by_key, normalize_key, opacity_for, DensityBucket,
    DensityBucketSummary, KeyGroup,
};
pub use proximity::{
    cluster, cluster_default, summarize, ClusterSummary, ProximityGroup, ProximityGroupSummary,
};
