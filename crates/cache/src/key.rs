//! Cache keys for search results
//!
//! Keys are prefixed by search kind so quick, full-text and advanced results
//! never collide. Structured requests are encoded as compact JSON.

use serde::Serialize;

use crate::error::CacheResult;

/// Key for a quick keyword search
///
/// A search across every space uses `all` in place of the space id.
#[must_use]
pub fn quick_search_key(keyword: &str, space_id: Option<u64>, limit: usize) -> String {
    match space_id {
        Some(id) => format!("quick_{keyword}_{id}_{limit}"),
        None => format!("quick_{keyword}_all_{limit}"),
    }
}

/// Key for a full-text search request
pub fn fulltext_search_key<R: Serialize + ?Sized>(request: &R) -> CacheResult<String> {
    Ok(format!("fulltext_{}", serde_json::to_string(request)?))
}

/// Key for an advanced (filtered) search request
pub fn advanced_search_key<R: Serialize + ?Sized>(request: &R) -> CacheResult<String> {
    Ok(format!("advanced_{}", serde_json::to_string(request)?))
}
