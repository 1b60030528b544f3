//! Application-level helpers for the CLI: input loading, output and summaries.

pub mod input;
pub mod output;
pub mod statistics;

// Re-export commonly used items
pub use input::{load_records, load_related_keys, RelatedEntity};
pub use output::write_json;
pub use statistics::{log_cluster_summary, log_density_summary};
