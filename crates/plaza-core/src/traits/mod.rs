//! Ports - traits the domain needs implemented by infrastructure

mod publisher;
mod repositories;

pub use publisher::EventPublisher;
pub use repositories::{
    CommentRepository, PostQuery, PostRepository, ReactionRepository, ReactionTypeRepository,
    RepoResult, TagRepository, UserRepository,
};
