//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in plaza-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod post;
mod reaction;
mod reaction_type;
mod tag;
mod user;

pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
pub use reaction_type::PgReactionTypeRepository;
pub use tag::PgTagRepository;
pub use user::PgUserRepository;
