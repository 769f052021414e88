//! Error types for lyra-cache
//!
//! Cache misses are `None`, never an error. Errors only come from
//! configuration and key encoding.

use thiserror::Error;

/// Cache errors
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Invalid cache configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Failed to encode cache key: {reason}")]
    KeyEncoding { reason: String },
}

impl CacheError {
    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "CACHE:CONFIG:INVALID",
            Self::KeyEncoding { .. } => "CACHE:KEY:ENCODING",
        }
    }

    /// Create invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        Self::KeyEncoding {
            reason: err.to_string(),
        }
    }
}

/// Result type for fallible cache operations
pub type CacheResult<T> = Result<T, CacheError>;
