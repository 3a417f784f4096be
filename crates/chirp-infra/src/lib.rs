//! # Chirp Infrastructure
//!
//! Concrete implementations of the ports defined in `chirp-core`:
//! Postgres repositories for users, follows, and posts, plus the Redis page
//! cache. In-memory variants of everything are always available for tests
//! and for running without external services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL repositories via SeaORM
//! - `redis` - Redis page cache

pub mod cache;
pub mod database;

// Re-exports - In-Memory
pub use cache::InMemoryPageCache;
pub use database::{InMemoryFollowRepository, InMemoryPostRepository, InMemoryUserRepository};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{PostgresFollowRepository, PostgresPostRepository, PostgresUserRepository};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use cache::{RedisConfig, RedisPageCache};
