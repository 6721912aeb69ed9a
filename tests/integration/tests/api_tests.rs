//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::collections::BTreeMap;

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn create_user(server: &TestServer) -> AuthorResponse {
    let request = CreateUserRequest::unique();
    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_post(server: &TestServer, author_id: &str) -> PostResponse {
    let request = CreatePostRequest::for_author(author_id);
    let response = server.post("/api/v1/posts", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn seeded_reaction_type(server: &TestServer) -> ReactionTypeResponse {
    let response = server.get("/api/v1/reaction-types").await.unwrap();
    let mut types: Vec<ReactionTypeResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(
        !types.is_empty(),
        "reaction_types table must be seeded for integration tests"
    );
    types.remove(0)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;

    let response = server
        .get(&format!("/api/v1/users/{}", user.id))
        .await
        .unwrap();
    let fetched: AuthorResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.name, user.name);
}

#[tokio::test]
async fn test_duplicate_user_email_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    server.post("/api/v1/users", &request).await.unwrap();
    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_fresh_post_has_sparse_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let post = create_post(&server, &user.id).await;

    assert!(post.reactions.is_none());
    assert!(post.viewer_reaction.is_none());
    assert!(post.comments.is_empty());
    assert_eq!(post.author.id, user.id);

    // The raw JSON must omit the sparse fields entirely
    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    let raw: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let obj = raw.as_object().unwrap();
    assert!(!obj.contains_key("reactions"));
    assert!(!obj.contains_key("viewerReaction"));
    assert!(!obj.contains_key("comments"));
}

#[tokio::test]
async fn test_update_and_delete_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let post = create_post(&server, &user.id).await;

    let update = UpdatePostRequest {
        title: "updated".to_string(),
        content: "updated content".to_string(),
    };
    let response = server
        .put(&format!("/api/v1/posts/{}", post.id), &update)
        .await
        .unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.content, "updated content");
    assert_eq!(updated.author.id, user.id);

    let response = server
        .delete(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_tree_with_reply() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let post = create_post(&server, &user.id).await;

    let c1_request = CreateCommentRequest {
        author_id: user.id.clone(),
        post_id: post.id.clone(),
        content: "top level".to_string(),
        parent_comment_id: None,
    };
    let response = server.post("/api/v1/comments", &c1_request).await.unwrap();
    let c1: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let c2_request = CreateCommentRequest {
        author_id: user.id.clone(),
        post_id: post.id.clone(),
        content: "reply".to_string(),
        parent_comment_id: Some(c1.id.clone()),
    };
    let response = server.post("/api/v1/comments", &c2_request).await.unwrap();
    let c2: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(c2.parent_comment_id.as_ref(), Some(&c1.id));

    let response = server
        .get(&format!("/api/v1/posts/{}/comments", post.id))
        .await
        .unwrap();
    let tree: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, c1.id);
    assert_eq!(tree[0].replies.len(), 1);
    assert_eq!(tree[0].replies[0].id, c2.id);

    // Deleting the parent removes the reply with it
    let response = server
        .delete(&format!("/api/v1/comments/{}", c1.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/comments/{}", c2.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_reply_must_share_the_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let post_a = create_post(&server, &user.id).await;
    let post_b = create_post(&server, &user.id).await;

    let parent_request = CreateCommentRequest {
        author_id: user.id.clone(),
        post_id: post_a.id.clone(),
        content: "on post a".to_string(),
        parent_comment_id: None,
    };
    let response = server
        .post("/api/v1/comments", &parent_request)
        .await
        .unwrap();
    let parent: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let crossed = CreateCommentRequest {
        author_id: user.id.clone(),
        post_id: post_b.id.clone(),
        content: "crossing posts".to_string(),
        parent_comment_id: Some(parent.id),
    };
    let response = server.post("/api/v1/comments", &crossed).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_upsert_counts_and_viewer_lookup() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = create_user(&server).await;
    let viewer = create_user(&server).await;
    let post = create_post(&server, &author.id).await;
    let reaction_type = seeded_reaction_type(&server).await;

    let request = ReactionRequest {
        viewer_id: viewer.id.clone(),
        target_id: post.id.clone(),
        target_type: "POST".to_string(),
        reaction_type_id: reaction_type.id.clone(),
    };
    let response = server.post("/api/v1/reactions", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Reacting again with the same type stays a single row
    let response = server.put("/api/v1/reactions", &request).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!(
            "/api/v1/reactions/counts?target_id={}&target_type=POST",
            post.id
        ))
        .await
        .unwrap();
    let counts: BTreeMap<String, i64> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.get(&reaction_type.name), Some(&1));

    let response = server
        .get(&format!(
            "/api/v1/reactions/viewer?viewer_id={}&target_id={}&target_type=POST",
            viewer.id, post.id
        ))
        .await
        .unwrap();
    let viewer_reaction: Option<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(viewer_reaction.as_ref(), Some(&reaction_type.name));

    // The author never reacted
    let response = server
        .get(&format!(
            "/api/v1/reactions/viewer?viewer_id={}&target_id={}&target_type=POST",
            author.id, post.id
        ))
        .await
        .unwrap();
    let author_reaction: Option<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(author_reaction.is_none());

    // Remove and verify the counts go sparse again
    let response = server
        .delete(&format!(
            "/api/v1/reactions?viewer_id={}&target_id={}&target_type=POST",
            viewer.id, post.id
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete(&format!(
            "/api/v1/reactions?viewer_id={}&target_id={}&target_type=POST",
            viewer.id, post.id
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Tag Tests
// ============================================================================

#[tokio::test]
async fn test_post_tags_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server).await;
    let post = create_post(&server, &user.id).await;
    let suffix = unique_suffix();
    let tag_name = format!("rust-{suffix}");

    let request = TagNamesRequest {
        names: vec![tag_name.clone()],
    };
    let response = server
        .post(&format!("/api/v1/posts/{}/tags", post.id), &request)
        .await
        .unwrap();
    let names: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(names.contains(&tag_name));

    let response = server
        .get(&format!("/api/v1/posts/by-tag/{tag_name}"))
        .await
        .unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, post.id);

    // An empty name list is rejected before touching the store
    let request = TagNamesRequest { names: vec![] };
    let response = server
        .post(&format!("/api/v1/posts/{}/tags", post.id), &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .delete_json(
            &format!("/api/v1/posts/{}/tags", post.id),
            &TagNamesRequest {
                names: vec![tag_name.clone()],
            },
        )
        .await
        .unwrap();
    let names: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!names.contains(&tag_name));
}
