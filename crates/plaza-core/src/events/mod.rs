//! Broadcast events pushed to subscribers

mod broadcast;

pub use broadcast::{ReactionChangedEvent, NEW_COMMENT_TOPIC, REACTION_CHANGED_TOPIC};
