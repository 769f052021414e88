//! Configuration for the result cache
//!
//! The TTL is (de)serialized as whole milliseconds (`ttl_ms`) so the console
//! settings file stays human editable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, CacheResult};

/// Default time-to-live: five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Default upper bound on stored entries.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Configuration for [`ResultCache`](crate::ResultCache).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time-to-live applied to every entry written by `cache_result`.
    #[serde(rename = "ttl_ms", with = "ttl_millis")]
    pub ttl: Duration,
    /// Maximum number of entries; the oldest entry is dropped past this.
    pub max_entries: usize,
    /// Whether to count hits, misses, insertions and evictions.
    pub track_metrics: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_entries: DEFAULT_MAX_ENTRIES,
            track_metrics: true,
        }
    }
}

impl CacheConfig {
    /// Create a configuration with the given TTL
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            ..Default::default()
        }
    }

    /// Set the time-to-live for cache entries
    #[must_use = "builder methods must be chained or built"]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the maximum number of entries
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Enable or disable metrics tracking
    #[must_use = "builder methods must be chained or built"]
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CacheResult<()> {
        if self.ttl.is_zero() {
            return Err(CacheError::invalid_config("ttl must be greater than zero"));
        }

        if self.max_entries == 0 {
            return Err(CacheError::invalid_config(
                "max_entries must be greater than zero",
            ));
        }

        Ok(())
    }
}

mod ttl_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        ttl: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
