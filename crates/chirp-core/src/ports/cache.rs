use async_trait::async_trait;

/// Cache trait - abstraction over page-cache backends (Redis, in-memory).
///
/// Entries expire after a TTL that is fixed when the implementation is
/// constructed, not passed per call. The cache is best-effort: callers treat
/// any `CacheError` as a miss, never as a request failure.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a value from the cache. `Ok(None)` is a miss.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value under `key` with the configured TTL.
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
