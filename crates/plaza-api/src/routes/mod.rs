//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{comments, health, posts, reactions, tags, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted outside the rate limiter)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(reaction_routes())
        .merge(tag_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        // Post CRUD
        .route("/posts", get(posts::list_posts))
        .route("/posts", post(posts::create_post))
        .route("/posts/by-author/:user_id", get(posts::get_posts_by_author))
        .route("/posts/by-tag/:name", get(posts::get_posts_by_tag))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id", put(posts::update_post))
        .route("/posts/:post_id", delete(posts::delete_post))
        // Post comments
        .route("/posts/:post_id/comments", get(comments::get_post_comments))
        // Post tags
        .route("/posts/:post_id/tags", post(tags::add_post_tags))
        .route("/posts/:post_id/tags", put(tags::replace_post_tags))
        .route("/posts/:post_id/tags", delete(tags::remove_post_tags))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", post(comments::create_comment))
        .route("/comments/:comment_id", get(comments::get_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
        .route(
            "/comments/:comment_id/replies",
            get(comments::get_comment_replies),
        )
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/reactions", post(reactions::create_reaction))
        .route("/reactions", put(reactions::update_reaction))
        .route("/reactions", delete(reactions::delete_reaction))
        .route("/reactions/counts", get(reactions::get_reaction_counts))
        .route("/reactions/viewer", get(reactions::get_viewer_reaction))
        .route("/reaction-types", get(reactions::list_reaction_types))
}

/// Tag routes
fn tag_routes() -> Router<AppState> {
    Router::new().route("/tags", get(tags::list_tags))
}
