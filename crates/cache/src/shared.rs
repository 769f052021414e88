//! Thread-safe handle over [`ResultCache`]

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::config::CacheConfig;
use crate::error::CacheResult;
use crate::result_cache::ResultCache;
use crate::stats::CacheMetrics;

/// A cloneable, lock-protected result cache.
///
/// Clones share the same entries. Reads return owned copies so the lock is
/// never held by callers.
#[derive(Debug)]
pub struct SharedResultCache<V> {
    inner: Arc<Mutex<ResultCache<V>>>,
}

impl<V> Clone for SharedResultCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for SharedResultCache<V> {
    fn default() -> Self {
        Self::from_cache(ResultCache::default())
    }
}

impl<V> SharedResultCache<V> {
    /// Create a shared cache with the given TTL
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::from_cache(ResultCache::new(ttl))
    }

    /// Create a shared cache from a validated configuration
    pub fn with_config(config: CacheConfig) -> CacheResult<Self> {
        ResultCache::with_config(config).map(Self::from_cache)
    }

    /// Wrap an existing cache
    #[must_use]
    pub fn from_cache(cache: ResultCache<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// See [`ResultCache::cache_result`]
    pub fn cache_result(&self, key: impl Into<String>, result: V) {
        self.inner.lock().cache_result(key, result);
    }

    /// See [`ResultCache::remove`]
    pub fn remove(&self, key: &str) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// See [`ResultCache::clear_cache`]
    pub fn clear_cache(&self) {
        self.inner.lock().clear_cache();
    }

    /// See [`ResultCache::purge_expired`]
    pub fn purge_expired(&self) -> usize {
        self.inner.lock().purge_expired()
    }

    /// See [`ResultCache::contains_key`]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.lock().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    #[must_use]
    pub fn metrics(&self) -> CacheMetrics {
        self.inner.lock().metrics()
    }
}

impl<V: Clone> SharedResultCache<V> {
    /// Look up a live result, cloning it out of the cache
    #[must_use]
    pub fn get_cached_result(&self, key: &str) -> Option<V> {
        self.inner.lock().get_cached_result(key).cloned()
    }

    /// Return the live result for `key`, or compute and cache it
    ///
    /// The lock is released while `fetch` runs, so two callers missing on
    /// the same key at once may both fetch; the later write wins.
    pub fn get_or_try_insert_with<F, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(result) = self.get_cached_result(key) {
            return Ok(result);
        }

        let result = fetch()?;
        self.cache_result(key, result.clone());
        Ok(result)
    }
}
