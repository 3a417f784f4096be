//! Application state - shared across all handlers.
//!
//! Wires concrete adapters behind the `chirp-core` ports: Postgres and Redis
//! when configured, in-memory fallbacks otherwise.

use std::sync::Arc;
use std::time::Duration;

use chirp_core::ports::{Cache, FollowRepository, PostRepository, UserRepository};
use chirp_core::{TimelineConfig, TimelineService};
use chirp_infra::cache::InMemoryPageCache;
use chirp_infra::database::{
    InMemoryFollowRepository, InMemoryPostRepository, InMemoryUserRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub timeline: Arc<TimelineService>,
    /// Which post/user store is live: "postgres" or "memory".
    pub store_backend: &'static str,
    /// Which page cache is live: "redis" or "memory".
    pub cache_backend: &'static str,
}

impl AppState {
    /// Build the application state with the appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (cache, cache_backend) = Self::build_cache(config).await;
        let (users, follows, posts, store_backend) = Self::build_repositories(config).await;

        let timeline = Arc::new(TimelineService::new(
            users.clone(),
            follows.clone(),
            posts.clone(),
            cache,
            TimelineConfig {
                upstream_timeout: config.upstream_timeout,
            },
        ));

        tracing::info!(store = store_backend, cache = cache_backend, "Application state initialized");

        Self {
            users,
            follows,
            posts,
            timeline,
            store_backend,
            cache_backend,
        }
    }

    /// Fully in-memory state - used in tests and for local runs without
    /// external services.
    pub fn in_memory(cache_ttl: Duration, upstream_timeout: Duration) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let follows: Arc<dyn FollowRepository> = Arc::new(InMemoryFollowRepository::new());
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        let cache: Arc<dyn Cache> = Arc::new(InMemoryPageCache::new(cache_ttl));

        let timeline = Arc::new(TimelineService::new(
            users.clone(),
            follows.clone(),
            posts.clone(),
            cache,
            TimelineConfig { upstream_timeout },
        ));

        Self {
            users,
            follows,
            posts,
            timeline,
            store_backend: "memory",
            cache_backend: "memory",
        }
    }

    async fn build_cache(config: &AppConfig) -> (Arc<dyn Cache>, &'static str) {
        #[cfg(feature = "redis")]
        {
            if let Some(url) = &config.redis_url {
                let redis_config = chirp_infra::cache::RedisConfig {
                    url: url.clone(),
                    connect_timeout: Duration::from_secs(5),
                    ttl: config.cache_ttl,
                };
                match chirp_infra::cache::RedisPageCache::new(redis_config).await {
                    Ok(cache) => return (Arc::new(cache), "redis"),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to Redis: {}. Using in-memory cache.",
                            e
                        );
                    }
                }
            }
        }

        if !cfg!(feature = "redis") && config.redis_url.is_some() {
            tracing::warn!("REDIS_URL set but server built without redis support");
        }

        (Arc::new(InMemoryPageCache::new(config.cache_ttl)), "memory")
    }

    async fn build_repositories(
        config: &AppConfig,
    ) -> (
        Arc<dyn UserRepository>,
        Arc<dyn FollowRepository>,
        Arc<dyn PostRepository>,
        &'static str,
    ) {
        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match chirp_infra::database::connect(db_config).await {
                    Ok(conn) => {
                        return (
                            Arc::new(chirp_infra::database::PostgresUserRepository::new(
                                conn.clone(),
                            )),
                            Arc::new(chirp_infra::database::PostgresFollowRepository::new(
                                conn.clone(),
                            )),
                            Arc::new(chirp_infra::database::PostgresPostRepository::new(conn)),
                            "postgres",
                        );
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory repositories.",
                            e
                        );
                    }
                }
            }
        }

        if config.database.is_none() {
            tracing::warn!("DATABASE_URL not set. Running with in-memory repositories.");
        }

        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryFollowRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            "memory",
        )
    }
}
