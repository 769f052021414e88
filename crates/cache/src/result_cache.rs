//! Single-owner TTL result cache
//!
//! Entries are stamped with an absolute expiry when written. Reads evict the
//! entry they find stale; writes sweep every stale entry and then enforce the
//! configured capacity by dropping the oldest entries.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::entry::CacheEntry;
use crate::error::CacheResult;
use crate::stats::CacheMetrics;

/// A key/value cache whose entries expire after a fixed TTL.
///
/// Reads take `&mut self` because they may evict. For use from several
/// threads wrap it in [`SharedResultCache`](crate::SharedResultCache).
#[derive(Debug, Clone)]
pub struct ResultCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    config: CacheConfig,
    metrics: CacheMetrics,
}

impl<V> Default for ResultCache<V> {
    fn default() -> Self {
        Self::from_parts(CacheConfig::default())
    }
}

impl<V> ResultCache<V> {
    /// Create a cache with the given TTL and default limits
    ///
    /// Any TTL is accepted here; a zero TTL keeps an entry alive only for the
    /// instant it was written. Use [`with_config`](Self::with_config) to get a
    /// validated configuration.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::from_parts(CacheConfig::new(ttl))
    }

    /// Create a cache from a validated configuration
    pub fn with_config(config: CacheConfig) -> CacheResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            metrics: CacheMetrics::new(),
        }
    }

    // ==================== Core API ====================

    /// Store `result` under `key`, replacing any previous entry
    ///
    /// After storing, every stale entry is swept and the cache is trimmed to
    /// `max_entries` by dropping the oldest entries.
    pub fn cache_result(&mut self, key: impl Into<String>, result: V) {
        let now = Instant::now();
        let key = key.into();
        trace!(key = %key, "caching result");

        let entry = CacheEntry::created_at(key.clone(), result, now, self.config.ttl);
        self.entries.insert(key, entry);
        self.record(|m| m.insertions += 1);

        self.purge_expired_at(now);
        self.enforce_capacity();
    }

    /// Look up a live result
    ///
    /// A stale entry under `key` is removed and reported as a miss. Other
    /// stale entries are left for the next write to sweep.
    pub fn get_cached_result(&mut self, key: &str) -> Option<&V> {
        let now = Instant::now();
        let Some(expired) = self.entries.get(key).map(|entry| entry.is_expired_at(now)) else {
            self.record(|m| m.misses += 1);
            trace!(key, "cache miss");
            return None;
        };

        if expired {
            self.entries.remove(key);
            self.record(|m| {
                m.misses += 1;
                m.evictions += 1;
            });
            debug!(key, "evicted expired cache entry on read");
            return None;
        }

        self.record(|m| m.hits += 1);
        trace!(key, "cache hit");
        self.entries.get(key).map(|entry| &entry.result)
    }

    /// Remove every entry
    pub fn clear_cache(&mut self) {
        let cleared = self.entries.len();
        self.entries.clear();
        debug!(cleared, "cleared result cache");
    }

    // ==================== Maintenance ====================

    /// Remove one entry, returning its result whether or not it was stale
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.result)
    }

    /// Store a prebuilt entry as-is, without sweeping
    ///
    /// Returns the entry previously stored under the same key.
    pub fn insert_entry(&mut self, entry: CacheEntry<V>) -> Option<CacheEntry<V>> {
        self.record(|m| m.insertions += 1);
        self.entries.insert(entry.key.clone(), entry)
    }

    /// Check for a live entry without touching metrics or evicting
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        let now = Instant::now();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired_at(now))
    }

    /// Sweep every stale entry, returning how many were removed
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn purge_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - self.entries.len();

        if removed > 0 {
            self.record(|m| m.evictions += removed as u64);
            debug!(removed, remaining = self.entries.len(), "swept expired cache entries");
        }
        removed
    }

    fn enforce_capacity(&mut self) {
        while self.entries.len() > self.config.max_entries {
            let Some(oldest) = self
                .entries
                .values()
                .min_by_key(|entry| entry.timestamp)
                .map(|entry| entry.key.clone())
            else {
                break;
            };

            self.entries.remove(&oldest);
            self.record(|m| m.evictions += 1);
            debug!(key = %oldest, "evicted oldest cache entry over capacity");
        }
    }

    // ==================== Accessors ====================

    /// Number of stored entries, stale ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The TTL applied on write
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Usage counters (all zero when metrics are disabled)
    #[must_use]
    pub fn metrics(&self) -> CacheMetrics {
        self.metrics
    }

    /// Reset usage counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    #[inline]
    fn record(&mut self, update: impl FnOnce(&mut CacheMetrics)) {
        if self.config.track_metrics {
            update(&mut self.metrics);
        }
    }
}

impl<V: Clone> ResultCache<V> {
    /// Return the live result for `key`, or compute and cache it
    ///
    /// `fetch` runs only on a miss. An error from `fetch` is returned as-is
    /// and nothing is cached.
    pub fn get_or_try_insert_with<F, E>(&mut self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(result) = self.get_cached_result(key) {
            return Ok(result.clone());
        }

        let result = fetch()?;
        self.cache_result(key, result.clone());
        Ok(result)
    }
}
