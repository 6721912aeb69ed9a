//! User entity - represents an account that authors posts, comments, and reactions

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub name: String,
    /// Role shown as the author "title" in projected views (e.g. "Backend Dev")
    pub role: String,
    pub avatar: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, email: String, name: String, role: String) -> Self {
        Self {
            id,
            email,
            name,
            role,
            avatar: None,
            verified: false,
            created_at: Utc::now(),
        }
    }

    /// Check if the account has been verified
    #[inline]
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Update the avatar URL
    pub fn set_avatar(&mut self, avatar: Option<String>) {
        self.avatar = avatar;
    }
}
