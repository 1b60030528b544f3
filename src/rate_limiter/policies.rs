//! Reference rate-limit policies.
//!
//! These are the buckets the rest of the system expects to find: one per
//! external geocoding/postal provider plus the login and public registration
//! gates.

use std::time::Duration;

use strum_macros::EnumIter;

use super::bucket::RateLimiterConfig;
use super::limiter::RateLimiter;
use crate::config::{
    GEOCODER_FALLBACK_BULK_POLICY, GEOCODER_FALLBACK_STRICT_POLICY, GEOCODER_PRIMARY_POLICY,
    GEOCODER_SECONDARY_POLICY, LOGIN_POLICY, POSTAL_LOOKUP_POLICY, PUBLIC_REGISTRATION_POLICY,
};

/// Named policies registered by [`create_default_rate_limiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RateLimitPolicy {
    /// Primary geocoding provider
    GeocoderPrimary,
    /// Secondary geocoding provider
    GeocoderSecondary,
    /// Fair-use fallback geocoder, 1 req/s
    GeocoderFallbackStrict,
    /// Higher-throughput fallback geocoder
    GeocoderFallbackBulk,
    /// Postal-code lookup provider
    PostalLookup,
    /// Login attempts
    Login,
    /// Public registration form submissions
    PublicRegistration,
}

impl RateLimitPolicy {
    /// Limiter key for this policy.
    pub fn key(self) -> &'static str {
        match self {
            RateLimitPolicy::GeocoderPrimary => "geocoder-A",
            RateLimitPolicy::GeocoderSecondary => "geocoder-B",
            RateLimitPolicy::GeocoderFallbackStrict => "geocoder-fallback-1",
            RateLimitPolicy::GeocoderFallbackBulk => "geocoder-fallback-2",
            RateLimitPolicy::PostalLookup => "postal-lookup",
            RateLimitPolicy::Login => "login",
            RateLimitPolicy::PublicRegistration => "public-registration",
        }
    }

    /// Bucket configuration for this policy.
    pub fn config(self) -> RateLimiterConfig {
        let (max_tokens, refill_rate, interval_ms) = match self {
            RateLimitPolicy::GeocoderPrimary => GEOCODER_PRIMARY_POLICY,
            RateLimitPolicy::GeocoderSecondary => GEOCODER_SECONDARY_POLICY,
            RateLimitPolicy::GeocoderFallbackStrict => GEOCODER_FALLBACK_STRICT_POLICY,
            RateLimitPolicy::GeocoderFallbackBulk => GEOCODER_FALLBACK_BULK_POLICY,
            RateLimitPolicy::PostalLookup => POSTAL_LOOKUP_POLICY,
            RateLimitPolicy::Login => LOGIN_POLICY,
            RateLimitPolicy::PublicRegistration => PUBLIC_REGISTRATION_POLICY,
        };
        RateLimiterConfig::new(max_tokens, refill_rate, Duration::from_millis(interval_ms))
    }
}

impl std::fmt::Display for RateLimitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Builds a limiter with every [`RateLimitPolicy`] registered.
///
/// Construct it once at startup and pass it (usually as `Arc<RateLimiter>`) to
/// each call site that needs throttling.
pub fn create_default_rate_limiter() -> RateLimiter {
    use strum::IntoEnumIterator;

    let limiter = RateLimiter::new();
    for policy in RateLimitPolicy::iter() {
        limiter.register_config(policy.key(), policy.config());
    }
    limiter
}
