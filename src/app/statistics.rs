//! Summary logging for CLI runs.

use log::info;

use crate::clustering::{opacity_for, ClusterSummary, DensityBucket};
use crate::config::{OPACITY_HIGH, OPACITY_LOW, OPACITY_MEDIUM, OPACITY_SPARSE};

const BANDS: [f64; 4] = [OPACITY_SPARSE, OPACITY_LOW, OPACITY_MEDIUM, OPACITY_HIGH];

/// Logs the outcome of a clustering pass.
pub fn log_cluster_summary(summary: &ClusterSummary, elapsed: std::time::Duration) {
    info!(
        "Clustered {} records into {} groups in {:.2} ms (largest group: {}, skipped: {})",
        summary.clustered_records,
        summary.group_count,
        elapsed.as_secs_f64() * 1000.0,
        summary.largest_group,
        summary.skipped_records
    );
}

/// Buckets per opacity band, sparse to high, as assigned by [`opacity_for`].
fn band_counts(buckets: &[DensityBucket<'_>]) -> [usize; 4] {
    let mut bands = [0usize; 4];
    for bucket in buckets {
        let opacity = opacity_for(bucket.related_count);
        if let Some(band) = BANDS.iter().position(|&o| o == opacity) {
            bands[band] += 1;
        }
    }
    bands
}

/// Logs per-band bucket counts of a density pass.
pub fn log_density_summary(buckets: &[DensityBucket<'_>]) {
    let bands = band_counts(buckets);
    info!(
        "Aggregated {} neighborhoods (sparse: {}, low: {}, medium: {}, high: {})",
        buckets.len(),
        bands[0],
        bands[1],
        bands[2],
        bands[3]
    );
}
