//! # plaza-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthorResponse, CommentResponse, CreateCommentRequest, CreatePostRequest, CreateUserRequest,
    HealthResponse, PostResponse, ReactionRequest, ReactionTypeResponse, ReadinessResponse,
    TagNamesRequest, TagResponse, UpdatePostRequest,
};
pub use services::{
    CommentService, Notifier, PostService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TagService, UserService,
};
