//! Token bucket state and refill arithmetic.

use std::time::Duration;

use tokio::time::Instant;

use crate::config::DEFAULT_REFILL_INTERVAL;

/// Immutable configuration of one token bucket.
///
/// Values are taken as given; call sites use hardcoded policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimiterConfig {
    /// Bucket capacity
    pub max_tokens: f64,
    /// Tokens added per elapsed interval
    pub refill_rate: f64,
    /// Length of one refill interval
    pub refill_interval: Duration,
}

impl RateLimiterConfig {
    /// Creates a configuration.
    pub fn new(max_tokens: f64, refill_rate: f64, refill_interval: Duration) -> Self {
        Self {
            max_tokens,
            refill_rate,
            refill_interval,
        }
    }

    /// Creates a configuration with the default 1 second interval.
    pub fn per_second(max_tokens: f64, refill_rate: f64) -> Self {
        Self::new(max_tokens, refill_rate, DEFAULT_REFILL_INTERVAL)
    }

    /// Time for one token to regenerate: `refill_interval / refill_rate`.
    ///
    /// Falls back to `refill_interval` when the rate is zero, negative or NaN.
    pub fn token_regen_time(&self) -> Duration {
        Duration::try_from_secs_f64(self.refill_interval.as_secs_f64() / self.refill_rate)
            .unwrap_or(self.refill_interval)
    }
}

/// Snapshot returned by `RateLimiter::get_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketInfo {
    /// Whole tokens currently available
    pub available: u64,
    /// Bucket capacity, truncated to a whole number
    pub max: u64,
}

/// Per-key bucket. Tokens stay within `[0, max_tokens]`.
#[derive(Debug, Clone)]
pub(crate) struct TokenBucket {
    pub(crate) config: RateLimiterConfig,
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    pub(crate) fn new(config: RateLimiterConfig, now: Instant) -> Self {
        TokenBucket {
            config,
            tokens: config.max_tokens,
            last_refill: now,
        }
    }

    /// Adds `refill_rate` tokens per whole interval elapsed since the last refill.
    ///
    /// Partial intervals are not credited. `last_refill` only moves when tokens
    /// were added, so a partial interval keeps accumulating.
    pub(crate) fn refill(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_refill);
        let interval = self.config.refill_interval.as_nanos();
        #[allow(clippy::cast_precision_loss)]
        let intervals_elapsed = if interval == 0 {
            f64::INFINITY
        } else {
            (elapsed.as_nanos() / interval) as f64
        };
        let tokens_to_add = intervals_elapsed * self.config.refill_rate;

        if tokens_to_add > 0.0 {
            self.tokens = (self.tokens + tokens_to_add).min(self.config.max_tokens);
            self.last_refill = now;
        }
    }

    /// Refills, then takes `cost` tokens if all of them are available.
    pub(crate) fn try_consume(&mut self, cost: f64, now: Instant) -> bool {
        self.refill(now);
        if self.tokens >= cost {
            self.tokens = (self.tokens - cost).clamp(0.0, self.config.max_tokens.max(0.0));
            true
        } else {
            false
        }
    }

    /// Refills, then reports whole tokens.
    pub(crate) fn info(&mut self, now: Instant) -> BucketInfo {
        self.refill(now);
        BucketInfo {
            available: whole(self.tokens),
            max: whole(self.config.max_tokens),
        }
    }

    pub(crate) fn reset(&mut self, now: Instant) {
        self.tokens = self.config.max_tokens;
        self.last_refill = now;
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(tokens: f64) -> u64 {
    // Saturating cast: NaN and negatives become 0
    tokens.floor() as u64
}
