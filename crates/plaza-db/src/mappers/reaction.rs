//! Reaction type model <-> entity mapper

use plaza_core::entities::ReactionType;
use plaza_core::value_objects::Snowflake;

use crate::models::ReactionTypeModel;

impl From<ReactionTypeModel> for ReactionType {
    fn from(model: ReactionTypeModel) -> Self {
        ReactionType {
            id: Snowflake::new(model.id),
            name: model.name,
        }
    }
}
