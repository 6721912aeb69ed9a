//! User service
//!
//! Minimal account management: accounts are open and carry no credentials;
//! callers are trusted to identify themselves (authentication is out of
//! scope for this service).

use plaza_core::entities::User;
use plaza_core::error::DomainError;
use plaza_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::AuthorResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user. Email and name are unique; a duplicate surfaces as a
    /// conflict from the store.
    #[instrument(skip(self, email, name, role, avatar))]
    pub async fn create_user(
        &self,
        email: String,
        name: String,
        role: String,
        avatar: Option<String>,
    ) -> ServiceResult<AuthorResponse> {
        let mut user = User::new(self.ctx.generate_id(), email, name, role);
        user.set_avatar(avatar);

        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, name = %user.name, "User created");

        Ok(AuthorResponse::from(&user))
    }

    /// Get one user's author view
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Snowflake) -> ServiceResult<AuthorResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?;

        Ok(AuthorResponse::from(&user))
    }
}
