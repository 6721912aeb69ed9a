//! User model <-> entity mapper

use plaza_core::entities::User;
use plaza_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            email: model.email,
            name: model.name,
            role: model.role,
            avatar: model.avatar_url,
            verified: model.verified,
            created_at: model.created_at,
        }
    }
}
