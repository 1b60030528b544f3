//! Neighborhood density aggregation.
//!
//! Records are bucketed by a normalized neighborhood key. Each bucket's
//! opacity comes from a caller-supplied count of related entities (e.g. teams
//! working that neighborhood) mapped through fixed bands.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{
    NO_NEIGHBORHOOD_KEY, OPACITY_HIGH, OPACITY_LOW, OPACITY_LOW_MAX, OPACITY_MEDIUM,
    OPACITY_MEDIUM_MAX, OPACITY_SPARSE, OPACITY_SPARSE_MAX,
};
use crate::geo::{centroid, GeoPoint, GeoRecord};

/// Records sharing a neighborhood key.
#[derive(Debug, Clone)]
pub struct KeyGroup<'a> {
    /// Members with valid coordinates, in input order
    pub members: Vec<&'a GeoRecord>,
    /// Mean of the members' coordinates
    pub centroid: GeoPoint,
}

/// A neighborhood bucket ready for shading.
#[derive(Debug, Clone)]
pub struct DensityBucket<'a> {
    /// Normalized neighborhood key
    pub key: String,
    /// Members with valid coordinates
    pub members: Vec<&'a GeoRecord>,
    /// Mean of the members' coordinates
    pub centroid: GeoPoint,
    /// Related entities sharing the key, as supplied by the caller
    pub related_count: usize,
    /// Fill opacity in `[0.3, 0.9]`
    pub opacity: f64,
}

impl DensityBucket<'_> {
    /// Owned, serializable view of the bucket.
    pub fn summary(&self) -> DensityBucketSummary {
        DensityBucketSummary {
            key: self.key.clone(),
            member_ids: self.members.iter().map(|r| r.id.clone()).collect(),
            centroid: self.centroid,
            related_count: self.related_count,
            opacity: self.opacity,
        }
    }
}

/// Serializable form of a [`DensityBucket`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityBucketSummary {
    /// Normalized neighborhood key
    pub key: String,
    /// Member ids in input order
    pub member_ids: Vec<String>,
    /// Mean of the members' coordinates
    pub centroid: GeoPoint,
    /// Related entities sharing the key
    pub related_count: usize,
    /// Fill opacity
    pub opacity: f64,
}

/// Trims and uppercases a key; missing or blank keys map to `"SEM BAIRRO"`.
pub fn normalize_key(key: Option<&str>) -> String {
    match key.map(str::trim) {
        Some(k) if !k.is_empty() => k.to_uppercase(),
        _ => NO_NEIGHBORHOOD_KEY.to_string(),
    }
}

/// Counts occurrences per normalized key.
///
/// Missing keys are counted under the `"SEM BAIRRO"` bucket, never dropped.
pub fn count_by_key<I, S>(keys: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts
            .entry(normalize_key(key.as_ref().map(|k| k.as_ref())))
            .or_insert(0) += 1;
    }
    counts
}

/// Groups records by normalized neighborhood.
///
/// Records with invalid coordinates are left out, so a neighborhood whose
/// records all lack coordinates produces no group.
pub fn group_by_key(records: &[GeoRecord]) -> BTreeMap<String, KeyGroup<'_>> {
    let mut buckets: BTreeMap<String, Vec<(&GeoRecord, GeoPoint)>> = BTreeMap::new();
    for record in records {
        let Some(point) = record.point() else {
            continue;
        };
        buckets
            .entry(normalize_key(record.neighborhood.as_deref()))
            .or_default()
            .push((record, point));
    }

    buckets
        .into_iter()
        .filter_map(|(key, entries)| {
            let center = centroid(entries.iter().map(|(_, p)| *p))?;
            let members = entries.into_iter().map(|(r, _)| r).collect();
            Some((
                key,
                KeyGroup {
                    members,
                    centroid: center,
                },
            ))
        })
        .collect()
}

/// Maps a related-entity count to a fill opacity band.
///
/// | count  | opacity |
/// |--------|---------|
/// | 0..=1  | 0.3     |
/// | 2..=5  | 0.5     |
/// | 6..=10 | 0.7     |
/// | 11..   | 0.9     |
pub fn opacity_for(related_count: usize) -> f64 {
    match related_count {
        n if n <= OPACITY_SPARSE_MAX => OPACITY_SPARSE,
        n if n <= OPACITY_LOW_MAX => OPACITY_LOW,
        n if n <= OPACITY_MEDIUM_MAX => OPACITY_MEDIUM,
        _ => OPACITY_HIGH,
    }
}

/// Joins [`group_by_key`] with caller-supplied related counts.
///
/// `related_counts` is keyed by normalized key (as produced by
/// [`count_by_key`]); a neighborhood absent from it counts as zero. Buckets are
/// ordered by key.
pub fn density_buckets<'a>(
    records: &'a [GeoRecord],
    related_counts: &BTreeMap<String, usize>,
) -> Vec<DensityBucket<'a>> {
    group_by_key(records)
        .into_iter()
        .map(|(key, group)| {
            let related_count = related_counts.get(&key).copied().unwrap_or(0);
            DensityBucket {
                members: group.members,
                centroid: group.centroid,
                related_count,
                opacity: opacity_for(related_count),
                key,
            }
        })
        .collect()
}
