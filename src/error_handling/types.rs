//! Error type definitions.
//!
//! Clustering and density aggregation never fail; dirty coordinates are
//! filtered out. The errors here cover process setup, input loading and the
//! caller-side rate-limit wrappers.

use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for loading registration or related-entity files.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid JSON array of the expected shape.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// Path that failed
        path: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Errors produced by the caller-side rate-limit wrappers.
///
/// The limiter itself signals exhaustion with `false` or by waiting longer;
/// these variants exist for handlers that need an error value (e.g. to answer
/// with a 429-equivalent).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateLimitError {
    /// No token was available for `key`.
    #[error("Rate limit exceeded for '{key}', retry in {retry_after:?}")]
    Exhausted {
        /// Limiter key
        key: String,
        /// Time for one token to regenerate
        retry_after: Duration,
    },

    /// `wait_for_token` did not complete within the caller's bound.
    #[error("Timed out after {waited:?} waiting for a '{key}' token")]
    Timeout {
        /// Limiter key
        key: String,
        /// Bound that elapsed
        waited: Duration,
    },
}
