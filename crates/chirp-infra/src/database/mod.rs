//! Database adapters - Postgres via SeaORM plus in-memory fallbacks.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres;

pub use connections::DatabaseConfig;
pub use memory::{InMemoryFollowRepository, InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres::{PostgresFollowRepository, PostgresPostRepository, PostgresUserRepository};
