//! Page cache implementations - Redis and in-memory fallback.

mod memory;

pub use memory::InMemoryPageCache;

#[cfg(feature = "redis")]
mod redis;
#[cfg(feature = "redis")]
pub use redis::{RedisConfig, RedisPageCache};
