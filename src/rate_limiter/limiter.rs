//! Multi-key token-bucket rate limiter.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::warn;
use tokio::time::{sleep, timeout, Instant};

use super::bucket::{BucketInfo, RateLimiterConfig, TokenBucket};
use crate::error_handling::RateLimitError;

/// Token-bucket rate limiter keyed by resource name.
///
/// Each key (e.g. `"geocoder-A"`, `"login"`) owns an independent bucket. All
/// bucket mutation happens under a synchronous lock with no `.await` inside it,
/// so interleaved callers never lose an update. Share it with `Arc`.
///
/// Keys that were never registered are allowed through (fail-open) and a
/// warning is logged, so a missing registration never blocks unrelated work.
///
/// # Example
///
/// ```no_run
/// use campaign_map::RateLimiter;
/// use std::time::Duration;
///
/// # async fn example() {
/// let limiter = RateLimiter::new();
/// limiter.register("geocoder-A", 10.0, 3.0, Duration::from_secs(1));
///
/// limiter.wait_for_token("geocoder-A", 1.0).await;
/// // ... outbound request ...
///
/// if !limiter.try_consume("geocoder-A", 1.0) {
///     // over quota
/// }
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RateLimiter {
    buckets: Mutex<HashMap<String, TokenBucket>>,
}

/// Result of one consumption attempt.
enum Attempt {
    Granted,
    Unregistered,
    Denied { retry_after: Duration },
}

impl RateLimiter {
    /// Creates a limiter with no registered keys.
    pub fn new() -> Self {
        Self::default()
    }

    fn buckets(&self) -> MutexGuard<'_, HashMap<String, TokenBucket>> {
        // A panic while holding the lock cannot leave a bucket half-updated
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `key`, replacing any previous configuration and state.
    ///
    /// The bucket starts full.
    pub fn register(
        &self,
        key: impl Into<String>,
        max_tokens: f64,
        refill_rate: f64,
        refill_interval: Duration,
    ) {
        self.register_config(
            key,
            RateLimiterConfig::new(max_tokens, refill_rate, refill_interval),
        );
    }

    /// Registers `key` with a prepared configuration.
    pub fn register_config(&self, key: impl Into<String>, config: RateLimiterConfig) {
        let key = key.into();
        log::debug!(
            "Registering rate limiter '{}': {} tokens, +{} every {:?}",
            key,
            config.max_tokens,
            config.refill_rate,
            config.refill_interval
        );
        self.buckets()
            .insert(key, TokenBucket::new(config, Instant::now()));
    }

    /// Returns `true` if `key` has a bucket.
    pub fn is_registered(&self, key: &str) -> bool {
        self.buckets().contains_key(key)
    }

    /// Returns the configuration registered for `key`.
    pub fn config(&self, key: &str) -> Option<RateLimiterConfig> {
        self.buckets().get(key).map(|b| b.config)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.buckets().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn attempt(&self, key: &str, cost: f64) -> Attempt {
        let mut buckets = self.buckets();
        let Some(bucket) = buckets.get_mut(key) else {
            warn!("Rate limiter '{}' is not registered, allowing request", key);
            return Attempt::Unregistered;
        };
        if bucket.try_consume(cost, Instant::now()) {
            Attempt::Granted
        } else {
            Attempt::Denied {
                retry_after: bucket.config.token_regen_time(),
            }
        }
    }

    /// Takes `cost` tokens from `key` if they are all available.
    ///
    /// Refills first. Returns `false` without consuming anything when the
    /// bucket holds fewer than `cost` tokens. Unregistered keys return `true`.
    pub fn try_consume(&self, key: &str, cost: f64) -> bool {
        !matches!(self.attempt(key, cost), Attempt::Denied { .. })
    }

    /// [`try_consume`](Self::try_consume) with a cost of one token.
    pub fn try_consume_one(&self, key: &str) -> bool {
        self.try_consume(key, 1.0)
    }

    /// Like [`try_consume_one`](Self::try_consume_one) but returns an error
    /// carrying the time for one token to regenerate.
    ///
    /// Meant for login and public submission handlers that answer with a
    /// 429-style response.
    pub fn check(&self, key: &str) -> Result<(), RateLimitError> {
        match self.attempt(key, 1.0) {
            Attempt::Granted | Attempt::Unregistered => Ok(()),
            Attempt::Denied { retry_after } => Err(RateLimitError::Exhausted {
                key: key.to_string(),
                retry_after,
            }),
        }
    }

    /// Waits until `cost` tokens can be taken from `key`, then takes them.
    ///
    /// Between attempts the task sleeps for `refill_interval / refill_rate`.
    /// Other tasks may take tokens while this one sleeps; there is no queueing.
    /// There is no timeout: a `cost` above the bucket capacity never completes.
    /// Unregistered keys complete immediately.
    pub async fn wait_for_token(&self, key: &str, cost: f64) {
        loop {
            let retry_after = match self.attempt(key, cost) {
                Attempt::Granted | Attempt::Unregistered => return,
                Attempt::Denied { retry_after } => retry_after,
            };
            log::trace!(
                "Rate limiter '{}' exhausted, retrying in {:?}",
                key,
                retry_after
            );
            sleep(retry_after).await;
        }
    }

    /// [`wait_for_token`](Self::wait_for_token) bounded by `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RateLimitError::Timeout` if no token was taken within `limit`.
    pub async fn wait_for_token_timeout(
        &self,
        key: &str,
        cost: f64,
        limit: Duration,
    ) -> Result<(), RateLimitError> {
        timeout(limit, self.wait_for_token(key, cost))
            .await
            .map_err(|_| RateLimitError::Timeout {
                key: key.to_string(),
                waited: limit,
            })
    }

    /// Runs `operation` after taking one token from `key`.
    ///
    /// The operation's output, including any error, is returned untouched.
    pub async fn throttle<F>(&self, key: &str, operation: F) -> F::Output
    where
        F: Future,
    {
        self.wait_for_token(key, 1.0).await;
        operation.await
    }

    /// Refills `key`, then reports whole available tokens and capacity.
    ///
    /// `None` if `key` is not registered.
    pub fn get_info(&self, key: &str) -> Option<BucketInfo> {
        self.buckets()
            .get_mut(key)
            .map(|bucket| bucket.info(Instant::now()))
    }

    /// Refills `key` to capacity. No-op for unregistered keys.
    pub fn reset(&self, key: &str) {
        if let Some(bucket) = self.buckets().get_mut(key) {
            bucket.reset(Instant::now());
        }
    }

    /// Refills every registered key to capacity.
    pub fn reset_all(&self) {
        let now = Instant::now();
        for bucket in self.buckets().values_mut() {
            bucket.reset(now);
        }
    }
}
