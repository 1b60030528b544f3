//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - Rate limiter with the reference policies

mod logger;

use std::sync::Arc;

use crate::rate_limiter::{create_default_rate_limiter, RateLimiter};

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the process-wide rate limiter.
///
/// Registers every reference policy and wraps the limiter in an `Arc` so it
/// can be handed to each call site that gates outbound requests or login and
/// registration attempts.
pub fn init_rate_limiter() -> Arc<RateLimiter> {
    let limiter = create_default_rate_limiter();
    log::debug!("Rate limiter ready with keys: {}", limiter.keys().join(", "));
    Arc::new(limiter)
}
