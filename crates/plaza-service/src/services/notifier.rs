//! Change notifier
//!
//! Stateless fan-out of the two broadcast events. Delivery is best-effort
//! and never transactional with the store mutation that triggered it: a
//! failed publish is logged and suppressed, because reaction counts are
//! idempotently re-derivable and a lost comment event only delays a reload.

use std::collections::BTreeMap;

use plaza_core::events::{ReactionChangedEvent, NEW_COMMENT_TOPIC, REACTION_CHANGED_TOPIC};
use plaza_core::value_objects::{Snowflake, TargetKind};
use tracing::warn;

use crate::dto::CommentResponse;

use super::context::ServiceContext;

/// Change notifier
pub struct Notifier<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> Notifier<'a> {
    /// Create a new Notifier
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Broadcast a freshly created comment to the shared comment channel.
    /// The payload is the annotated comment view; consumers filter by post.
    pub async fn comment_created(&self, comment: &CommentResponse) {
        let payload = match serde_json::to_value(comment) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, comment_id = %comment.id, "Failed to serialize comment event");
                return;
            }
        };

        if let Err(e) = self.ctx.publisher().publish(NEW_COMMENT_TOPIC, payload).await {
            warn!(error = %e, comment_id = %comment.id, "Failed to publish new-comment event");
        }
    }

    /// Broadcast a target's fresh reaction counts to the shared reaction
    /// channel. The payload never carries a viewer reaction: every
    /// subscriber re-queries its own after receiving this event.
    pub async fn reaction_changed(
        &self,
        target_id: Snowflake,
        target_kind: TargetKind,
        counts: &BTreeMap<String, i64>,
    ) {
        let event = ReactionChangedEvent::new(target_id, target_kind, counts.clone());
        let payload = match serde_json::to_value(&event) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, target_id = %target_id, "Failed to serialize reaction event");
                return;
            }
        };

        if let Err(e) = self
            .ctx
            .publisher()
            .publish(REACTION_CHANGED_TOPIC, payload)
            .await
        {
            warn!(
                error = %e,
                target_id = %target_id,
                target_kind = %target_kind,
                "Failed to publish reaction-changed event"
            );
        }
    }
}
