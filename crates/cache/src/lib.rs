//! # lyra-cache
//!
//! Session-scoped result cache with a fixed time-to-live, used to avoid
//! repeating identical search requests against the backend.
//!
//! - [`ResultCache`] is the single-owner cache.
//! - [`SharedResultCache`] wraps it in a lock for use across threads.
//! - [`key`] builds the keys search results are stored under.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use lyra_cache::{ResultCache, key::quick_search_key};
//!
//! let mut cache = ResultCache::new(Duration::from_secs(300));
//! let key = quick_search_key("invoice", None, 20);
//!
//! cache.cache_result(key.clone(), vec!["invoice-2024.pdf"]);
//! assert_eq!(cache.get_cached_result(&key).map(Vec::len), Some(1));
//!
//! cache.clear_cache();
//! assert!(cache.get_cached_result(&key).is_none());
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod key;
pub mod result_cache;
pub mod shared;
pub mod stats;

pub use config::{CacheConfig, DEFAULT_MAX_ENTRIES, DEFAULT_TTL};
pub use entry::CacheEntry;
pub use error::{CacheError, CacheResult};
pub use result_cache::ResultCache;
pub use shared::SharedResultCache;
pub use stats::CacheMetrics;
