//! Data transfer objects
//!
//! Request DTOs deserialize and validate inbound payloads; response DTOs
//! shape the projected views sent over the wire and the broadcast channel.

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateCommentRequest, CreatePostRequest, CreateUserRequest, ReactionRequest, TagNamesRequest,
    UpdatePostRequest,
};
pub use responses::{
    AuthorResponse, CommentResponse, HealthChecks, HealthResponse, PostResponse,
    ReactionTypeResponse, ReadinessResponse, TagResponse,
};
