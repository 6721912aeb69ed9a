//! Event publisher port - the broadcast transport the notifier talks to
//!
//! Any transport satisfying "publish(topic, payload)" works: the Redis
//! implementation lives in the cache layer, tests use a recording double.

use async_trait::async_trait;

use crate::error::DomainError;

/// Publish-only broadcast channel addressed by topic string
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a serialized payload to a topic. Delivery is at-most-once;
    /// there is no replay.
    async fn publish(&self, topic: &str, payload: serde_json::Value) -> Result<(), DomainError>;
}
