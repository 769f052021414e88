//! Cache metrics

use serde::Serialize;

/// Counters describing how a cache has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheMetrics {
    /// Reads that returned a live entry
    pub hits: u64,
    /// Reads that found nothing (or only a stale entry)
    pub misses: u64,
    /// Writes through `cache_result` or `insert_entry`
    pub insertions: u64,
    /// Entries dropped because they expired or the cache was full
    pub evictions: u64,
}

impl CacheMetrics {
    /// Create zeroed metrics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of reads that were hits (0.0 when nothing was read)
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total reads
    #[must_use]
    pub fn requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Reset all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
