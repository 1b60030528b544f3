//! Token-bucket rate limiting keyed by resource name.
//!
//! This module implements the gate placed in front of outbound geocoding calls
//! and of login/public-registration attempts:
//! - Each key has a bucket of `max_tokens` refilled by `refill_rate` tokens per
//!   whole `refill_interval` elapsed
//! - `try_consume` is non-blocking and all-or-nothing
//! - `wait_for_token` sleeps for one token's regeneration time between attempts
//! - Unregistered keys are allowed through with a warning (fail-open)
//!
//! There is no global instance; build one with [`create_default_rate_limiter`]
//! and pass it around.

mod bucket;
mod limiter;
mod policies;

pub use bucket::{BucketInfo, RateLimiterConfig};
pub use limiter::RateLimiter;
pub use policies::{create_default_rate_limiter, RateLimitPolicy};
