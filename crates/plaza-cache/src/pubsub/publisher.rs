//! Redis Pub/Sub publisher.
//!
//! Publishes broadcast events to Redis channels for distribution to
//! subscribed clients. Delivery is at-most-once; reaction counts are
//! re-derivable by querying the store, so lost messages are acceptable.

use async_trait::async_trait;
use redis::AsyncCommands;

use plaza_core::error::DomainError;
use plaza_core::traits::EventPublisher;

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::PubSubChannel;

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish a JSON payload to a channel, returning the receiver count
    pub async fn publish(
        &self,
        channel: &PubSubChannel,
        payload: &serde_json::Value,
    ) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();
        let body = serde_json::to_string(payload)?;

        let receivers: u32 = conn.publish(channel_name, &body).await?;

        tracing::debug!(
            channel = %channel_name,
            receivers = receivers,
            "Published event"
        );

        Ok(receivers)
    }
}

#[async_trait]
impl EventPublisher for Publisher {
    async fn publish(&self, topic: &str, payload: serde_json::Value) -> Result<(), DomainError> {
        let channel = PubSubChannel::parse(topic);
        Publisher::publish(self, &channel, &payload)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::PublishError(e.to_string()))
    }
}
