//! Reaction database models

use sqlx::FromRow;

/// Database model for reaction_types table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionTypeModel {
    pub id: i64,
    pub name: String,
}

/// Aggregated per-type reaction count (from the grouped count query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub name: String,
    pub count: i64,
}
