//! # plaza-cache
//!
//! Redis layer for pub/sub event fan-out.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Pub/Sub**: Publish-only broadcast of comment and reaction events
//!
//! ## Example
//!
//! ```ignore
//! use plaza_cache::{Publisher, PubSubChannel, RedisPool, RedisPoolConfig};
//!
//! // Create Redis pool
//! let config = RedisPoolConfig::default();
//! let pool = RedisPool::new(config)?;
//!
//! // Publish an event
//! let publisher = Publisher::new(pool);
//! publisher.publish(&PubSubChannel::ReactionChanges, &payload).await?;
//! ```

pub mod pool;
pub mod pubsub;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export pubsub types
pub use pubsub::{PubSubChannel, Publisher};
