//! Redis page cache with automatic reconnection.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use chirp_core::ports::{Cache, CacheError};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Lifetime of every cached timeline page.
    pub ttl: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            ttl: Duration::from_secs(30),
        }
    }
}

impl RedisConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            ttl: Duration::from_secs(
                std::env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Redis-backed page cache.
///
/// Uses a connection manager for automatic reconnection. Every `set` applies
/// the TTL fixed at construction; entries are never explicitly invalidated,
/// staleness is bounded by the TTL alone.
pub struct RedisPageCache {
    conn: ConnectionManager,
    ttl: Duration,
}

impl RedisPageCache {
    pub async fn new(config: RedisConfig) -> Result<Self, CacheError> {
        let client =
            Client::open(config.url.as_str()).map_err(|e| CacheError::Connection(e.to_string()))?;

        // Bound the handshake so an unreachable Redis fails fast
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| CacheError::Connection("Connection timed out".to_string()))?
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, ttl_secs = config.ttl.as_secs(), "Connected to Redis page cache");

        Ok(Self {
            conn,
            ttl: config.ttl,
        })
    }

    /// Create from environment configuration.
    pub async fn from_env() -> Result<Self, CacheError> {
        Self::new(RedisConfig::from_env()).await
    }
}

#[async_trait]
impl Cache for RedisPageCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| CacheError::Operation(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, self.ttl.as_secs())
            .await
            .map_err(|e| CacheError::Operation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn get_test_cache(ttl: Duration) -> Option<RedisPageCache> {
        let config = RedisConfig {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6389".to_string()),
            connect_timeout: Duration::from_secs(1),
            ttl,
        };

        RedisPageCache::new(config).await.ok()
    }

    #[tokio::test]
    async fn test_redis_set_get() {
        let cache = match get_test_cache(Duration::from_secs(30)).await {
            Some(c) => c,
            None => {
                tracing::warn!("Redis not available, skipping test");
                return;
            }
        };

        cache.set("chirp_test_key", "chirp_test_value").await.unwrap();
        assert_eq!(
            cache.get("chirp_test_key").await.unwrap(),
            Some("chirp_test_value".to_string())
        );
    }

    #[tokio::test]
    async fn test_redis_ttl_expiry() {
        let cache = match get_test_cache(Duration::from_secs(1)).await {
            Some(c) => c,
            None => return,
        };

        cache.set("chirp_test_ttl_key", "value").await.unwrap();
        assert_eq!(
            cache.get("chirp_test_ttl_key").await.unwrap(),
            Some("value".to_string())
        );

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(cache.get("chirp_test_ttl_key").await.unwrap(), None);
    }
}
