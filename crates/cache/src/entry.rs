//! Cache entries with absolute expiry

use std::time::{Duration, Instant};

/// A cached result together with its creation and expiry instants.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The key the entry is stored under
    pub key: String,
    /// The cached value
    pub result: V,
    /// When the entry was created
    pub timestamp: Instant,
    /// Instant after which the entry is stale
    pub expiry: Instant,
}

impl<V> CacheEntry<V> {
    /// Create an entry created now that expires after `ttl`
    pub fn new(key: impl Into<String>, result: V, ttl: Duration) -> Self {
        Self::created_at(key, result, Instant::now(), ttl)
    }

    /// Create an entry created at `timestamp` that expires after `ttl`
    ///
    /// A TTL too large to represent as an `Instant` (e.g. `Duration::MAX`)
    /// saturates to the furthest representable expiry.
    pub fn created_at(
        key: impl Into<String>,
        result: V,
        timestamp: Instant,
        ttl: Duration,
    ) -> Self {
        Self::with_expiry(key, result, timestamp, saturating_expiry(timestamp, ttl))
    }

    /// Create an entry with explicit instants
    pub fn with_expiry(
        key: impl Into<String>,
        result: V,
        timestamp: Instant,
        expiry: Instant,
    ) -> Self {
        Self {
            key: key.into(),
            result,
            timestamp,
            expiry,
        }
    }

    /// Check if the entry is stale at `now`
    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now > self.expiry
    }

    /// Check if the entry is stale now
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Time left before the entry goes stale (zero once expired)
    pub fn remaining_ttl(&self, now: Instant) -> Duration {
        self.expiry.saturating_duration_since(now)
    }
}

/// `timestamp + ttl`, or the latest instant reachable from `timestamp` when
/// the sum overflows.
fn saturating_expiry(timestamp: Instant, ttl: Duration) -> Instant {
    if let Some(expiry) = timestamp.checked_add(ttl) {
        return expiry;
    }

    // Each step size fits at most once in the remaining headroom.
    let mut step = ttl / 2;
    let mut expiry = timestamp;
    while !step.is_zero() {
        match expiry.checked_add(step) {
            Some(later) => expiry = later,
            None => step /= 2,
        }
    }
    expiry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_inclusive() {
        let now = Instant::now();
        let entry = CacheEntry::with_expiry("k", 1, now, now);
        assert!(!entry.is_expired_at(now));
        assert!(entry.is_expired_at(now + Duration::from_nanos(1)));
    }

    #[test]
    fn test_created_at_adds_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::created_at("k", "v", now, Duration::from_secs(60));
        assert_eq!(entry.expiry, now + Duration::from_secs(60));
        assert_eq!(entry.remaining_ttl(now), Duration::from_secs(60));
        assert_eq!(
            entry.remaining_ttl(now + Duration::from_secs(90)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_huge_ttl_saturates_into_the_future() {
        let now = Instant::now();
        let entry = CacheEntry::created_at("k", 1, now, Duration::MAX);
        assert!(entry.expiry > now + Duration::from_secs(365 * 24 * 60 * 60));
        assert!(!entry.is_expired_at(now + Duration::from_secs(60)));
    }

    #[test]
    fn test_new_is_fresh() {
        let entry = CacheEntry::new("k", (), Duration::from_secs(60));
        assert!(!entry.is_expired());
        assert_eq!(entry.key, "k");
    }
}
