//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (geodesy, clustering, opacity bands, rate-limit policies)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, ClusterArgs, Command, DensityArgs, LogFormat, LogLevel};
