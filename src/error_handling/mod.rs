//! Error handling.
//!
//! This module provides the error types used by initialization, input loading
//! and the rate-limit wrappers.

mod types;

// Re-export public API
pub use types::{InitializationError, InputError, RateLimitError};
