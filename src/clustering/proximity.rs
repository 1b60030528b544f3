//! Greedy proximity clustering.
//!
//! Records are visited in input order. Each unvisited record with valid
//! coordinates seeds a group and pulls in every other unvisited record whose
//! distance to the seed (not to the running centroid) is below
//! `base_radius * CLUSTER_OVERLAP_FACTOR`. Membership is therefore order
//! dependent: a boundary record belongs to whichever seed reached it first.

use log::debug;
use serde::Serialize;

use crate::config::{CLUSTER_OVERLAP_FACTOR, DEFAULT_BASE_RADIUS_METERS};
use crate::geo::{centroid, haversine_distance, GeoPoint, GeoRecord};

/// A group of records close to a common seed.
///
/// Borrowed from the input slice and rebuilt on every call to [`cluster`].
#[derive(Debug, Clone)]
pub struct ProximityGroup<'a> {
    /// Mean of the members' coordinates
    pub centroid: GeoPoint,
    /// Members in discovery order; the seed comes first
    pub members: Vec<&'a GeoRecord>,
    /// Visual radius in meters
    pub radius: f64,
}

impl ProximityGroup<'_> {
    /// Owned, serializable view of the group.
    pub fn summary(&self) -> ProximityGroupSummary {
        ProximityGroupSummary {
            centroid: self.centroid,
            member_ids: self.members.iter().map(|r| r.id.clone()).collect(),
            member_count: self.members.len(),
            radius: self.radius,
        }
    }
}

/// Serializable form of a [`ProximityGroup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityGroupSummary {
    /// Mean of the members' coordinates
    pub centroid: GeoPoint,
    /// Member ids in discovery order
    pub member_ids: Vec<String>,
    /// Number of members
    pub member_count: usize,
    /// Visual radius in meters
    pub radius: f64,
}

/// Statistics about one clustering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusterSummary {
    /// Number of groups produced
    pub group_count: usize,
    /// Records that landed in a group
    pub clustered_records: usize,
    /// Records dropped for invalid coordinates
    pub skipped_records: usize,
    /// Size of the largest group
    pub largest_group: usize,
}

/// Partitions `records` into proximity groups.
///
/// Every record with valid coordinates ends up in exactly one group; records
/// with missing or non-numeric coordinates are left out. Singleton groups keep
/// `base_radius_meters`; groups of `n > 1` get `base_radius_meters * sqrt(n)`
/// and a centroid recomputed as the mean of their members.
///
/// Runs in O(n²) over the valid records.
pub fn cluster(records: &[GeoRecord], base_radius_meters: f64) -> Vec<ProximityGroup<'_>> {
    let points: Vec<Option<GeoPoint>> = records.iter().map(GeoRecord::point).collect();
    let threshold = base_radius_meters * CLUSTER_OVERLAP_FACTOR;
    let mut processed = vec![false; records.len()];
    let mut groups = Vec::new();

    for (seed_idx, seed_record) in records.iter().enumerate() {
        if processed[seed_idx] {
            continue;
        }
        let Some(seed) = points[seed_idx] else {
            continue;
        };
        processed[seed_idx] = true;

        let mut members = vec![seed_record];
        let mut member_points = vec![seed];

        for (idx, record) in records.iter().enumerate() {
            if processed[idx] {
                continue;
            }
            let Some(point) = points[idx] else {
                continue;
            };
            if haversine_distance(&seed, &point) < threshold {
                processed[idx] = true;
                members.push(record);
                member_points.push(point);
            }
        }

        let mut group = ProximityGroup {
            centroid: seed,
            members,
            radius: base_radius_meters,
        };
        if group.members.len() > 1 {
            if let Some(center) = centroid(member_points) {
                group.centroid = center;
            }
            #[allow(clippy::cast_precision_loss)]
            let n = group.members.len() as f64;
            group.radius = base_radius_meters * n.sqrt();
        }
        groups.push(group);
    }

    let stats = summarize(records, &groups);
    debug!(
        "Clustered {} of {} records into {} groups (largest {}, skipped {})",
        stats.clustered_records,
        records.len(),
        stats.group_count,
        stats.largest_group,
        stats.skipped_records
    );

    groups
}

/// [`cluster`] with [`DEFAULT_BASE_RADIUS_METERS`].
pub fn cluster_default(records: &[GeoRecord]) -> Vec<ProximityGroup<'_>> {
    cluster(records, DEFAULT_BASE_RADIUS_METERS)
}

/// Computes pass statistics for `groups` built from `records`.
pub fn summarize(records: &[GeoRecord], groups: &[ProximityGroup<'_>]) -> ClusterSummary {
    let clustered_records: usize = groups.iter().map(|g| g.members.len()).sum();
    ClusterSummary {
        group_count: groups.len(),
        clustered_records,
        skipped_records: records.len().saturating_sub(clustered_records),
        largest_group: groups.iter().map(|g| g.members.len()).max().unwrap_or(0),
    }
}
