//! campaign_map library: map aggregation and request throttling for a
//! campaign registration dashboard.
//!
//! This library provides:
//! - Greedy proximity clustering of geo-tagged registrations
//! - Per-neighborhood density buckets with banded opacity
//! - A multi-key token-bucket rate limiter for geocoding providers, login and
//!   public registration
//!
//! # Example
//!
//! ```no_run
//! use campaign_map::{cluster, create_default_rate_limiter, GeoRecord};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let records = vec![
//!     GeoRecord::new("r1", Some("Centro"), -23.5505, -46.6333),
//!     GeoRecord::new("r2", Some("Centro"), -23.5507, -46.6331),
//! ];
//! let groups = cluster(&records, 200.0);
//! println!("{} markers", groups.len());
//!
//! let limiter = create_default_rate_limiter();
//! limiter.wait_for_token("geocoder-A", 1.0).await;
//! # }
//! ```
//!
//! # Requirements
//!
//! Clustering and density aggregation are synchronous. The waiting operations
//! of [`RateLimiter`] need a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
pub mod clustering;
pub mod config;
pub mod error_handling;
pub mod geo;
pub mod initialization;
pub mod rate_limiter;

// Re-export public API
pub use clustering::{
    cluster, cluster_default, count_by_key, density_buckets, group_by_key, normalize_key,
    opacity_for, ClusterSummary, DensityBucket, KeyGroup, ProximityGroup,
};
pub use config::{LogFormat, LogLevel};
pub use error_handling::{InputError, RateLimitError};
pub use geo::{haversine_distance, parse_coordinate, CoordinateValue, GeoPoint, GeoRecord};
pub use rate_limiter::{
    create_default_rate_limiter, BucketInfo, RateLimitPolicy, RateLimiter, RateLimiterConfig,
};
pub use run::{run_cluster, run_density, ClusterReport, DensityReport};

// Internal run module (drives the CLI subcommands)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};

    use crate::app::{
        load_records, load_related_keys, log_cluster_summary, log_density_summary, write_json,
    };
    use crate::clustering::{cluster, count_by_key, density_buckets, summarize, ClusterSummary};
    use crate::config::{ClusterArgs, DensityArgs};

    /// Results of a `cluster` run.
    #[derive(Debug, Clone)]
    pub struct ClusterReport {
        /// Records read from the input file
        pub total_records: usize,
        /// Statistics of the clustering pass
        pub summary: ClusterSummary,
        /// Output file, `None` when written to stdout
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Results of a `density` run.
    #[derive(Debug, Clone)]
    pub struct DensityReport {
        /// Records read from the input file
        pub total_records: usize,
        /// Neighborhood buckets produced
        pub bucket_count: usize,
        /// Related entities read (0 without `--related`)
        pub related_entities: usize,
        /// Output file, `None` when written to stdout
        pub output: Option<PathBuf>,
    }

    /// Clusters the registrations in `args.file` and writes the groups as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be loaded or the output cannot be
    /// written. Bad coordinates are not errors; those records are skipped.
    pub fn run_cluster(args: &ClusterArgs) -> Result<ClusterReport> {
        let start = Instant::now();
        let records = load_records(&args.file)?;

        let groups = cluster(&records, args.base_radius);
        let summary = summarize(&records, &groups);
        let summaries: Vec<_> = groups.iter().map(|g| g.summary()).collect();

        write_json(&summaries, args.output.as_deref()).context("Failed to write clusters")?;
        log_cluster_summary(&summary, start.elapsed());

        Ok(ClusterReport {
            total_records: records.len(),
            summary,
            output: args.output.clone(),
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    /// Builds neighborhood density buckets and writes them as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if an input file cannot be loaded or the output cannot
    /// be written.
    pub fn run_density(args: &DensityArgs) -> Result<DensityReport> {
        let records = load_records(&args.file)?;
        let related_keys = match &args.related {
            Some(path) => load_related_keys(path)?,
            None => Vec::new(),
        };
        let related_counts = count_by_key(related_keys.iter().map(Option::as_deref));

        let buckets = density_buckets(&records, &related_counts);
        let summaries: Vec<_> = buckets.iter().map(|b| b.summary()).collect();

        write_json(&summaries, args.output.as_deref())
            .context("Failed to write density buckets")?;
        log_density_summary(&buckets);

        Ok(DensityReport {
            total_records: records.len(),
            bucket_count: buckets.len(),
            related_entities: related_keys.len(),
            output: args.output.clone(),
        })
    }
}
