//! Broadcast event types - the two messages pushed over the publish channel
//!
//! Every new comment goes to one shared topic; every reaction-count change
//! (posts and comments alike) goes to another. Consumers filter client-side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{Snowflake, TargetKind};

/// Topic carrying every newly created comment (annotated comment view)
pub const NEW_COMMENT_TOPIC: &str = "comments:new";

/// Topic carrying reaction-count changes for all targets
pub const REACTION_CHANGED_TOPIC: &str = "reactions:new";

/// Payload broadcast whenever the reaction counts of a target change.
///
/// `user_reaction` is ALWAYS serialized as null: a broadcast reaches every
/// subscriber, so carrying one viewer's reaction would leak it to the rest.
/// Each subscriber re-queries its own reaction after receiving this event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionChangedEvent {
    /// Target id as an opaque string, kind-agnostic on the wire
    pub target_id: String,
    pub target_type: TargetKind,
    /// Sparse per-type counts; types without reactions are absent
    pub reaction_counts: BTreeMap<String, i64>,
    pub user_reaction: Option<String>,
}

impl ReactionChangedEvent {
    /// Build the broadcast payload for a target's fresh counts
    #[must_use]
    pub fn new(
        target_id: Snowflake,
        target_type: TargetKind,
        reaction_counts: BTreeMap<String, i64>,
    ) -> Self {
        Self {
            target_id: target_id.to_string(),
            target_type,
            reaction_counts,
            user_reaction: None,
        }
    }
}
