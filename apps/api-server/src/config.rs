//! Application configuration loaded from environment variables.
//!
//! All tunables live here and are injected where needed; there are no
//! package-level singletons.

use std::env;
use std::time::Duration;

use chirp_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Postgres pool settings; `None` runs on in-memory repositories.
    pub database: Option<DatabaseConfig>,
    /// Redis URL; `None` runs on the in-memory page cache.
    pub redis_url: Option<String>,
    /// Lifetime of cached timeline pages.
    pub cache_ttl: Duration,
    /// Upper bound on each upstream call made by the timeline pipeline.
    pub upstream_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            redis_url: env::var("REDIS_URL").ok(),
            cache_ttl: Duration::from_secs(
                env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}
