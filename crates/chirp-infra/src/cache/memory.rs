//! In-memory page cache - used as fallback when Redis is not configured.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use chirp_core::ports::{Cache, CacheError};
use tokio::sync::RwLock;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory cache using a HashMap behind an async RwLock.
///
/// The TTL is fixed at construction, matching the `Cache` contract. Expired
/// entries are dropped lazily on read. Data is lost on process restart.
pub struct InMemoryPageCache {
    ttl: Duration,
    store: RwLock<HashMap<String, Entry>>,
}

impl InMemoryPageCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            store: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl Cache for InMemoryPageCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let store = self.store.read().await;
        let Some(entry) = store.get(key) else {
            return Ok(None);
        };

        if Instant::now() > entry.expires_at {
            drop(store);
            self.store.write().await.remove(key);
            return Ok(None);
        }

        Ok(Some(entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut store = self.store.write().await;
        store.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + self.ttl,
            },
        );
        Ok(())
    }
}
