//! Reaction entities - typed reactions on posts and comments

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, TargetKind};

/// Reaction type - one entry of the fixed reaction vocabulary
/// (e.g. "recomendar", "apoyar")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionType {
    pub id: Snowflake,
    pub name: String,
}

impl ReactionType {
    /// Create a new ReactionType
    pub fn new(id: Snowflake, name: String) -> Self {
        Self { id, name }
    }
}

/// Reaction entity
///
/// Identity is the (viewer, target id, target kind) tuple; at most one
/// reaction exists per tuple, enforced by the store's composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: Snowflake,
    pub target_id: Snowflake,
    pub target_kind: TargetKind,
    pub reaction_type_id: Snowflake,
    pub reacted_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction stamped "now"
    pub fn new(
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
        reaction_type_id: Snowflake,
    ) -> Self {
        Self {
            user_id,
            target_id,
            target_kind,
            reaction_type_id,
            reacted_at: Utc::now(),
        }
    }

    /// Check if the reaction targets the given post/comment
    #[inline]
    pub fn is_for(&self, target_id: Snowflake, target_kind: TargetKind) -> bool {
        self.target_id == target_id && self.target_kind == target_kind
    }
}
