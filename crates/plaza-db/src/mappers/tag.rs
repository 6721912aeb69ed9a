//! Tag model <-> entity mapper

use plaza_core::entities::Tag;
use plaza_core::value_objects::Snowflake;

use crate::models::TagModel;

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: Snowflake::new(model.id),
            name: model.name,
        }
    }
}
