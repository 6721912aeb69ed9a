//! Reaction handlers
//!
//! Endpoints for reacting to posts and comments and querying reaction
//! state. POST and PUT both land on the same upsert: a viewer has at most
//! one reaction per target, and reacting again replaces it.

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use plaza_core::value_objects::{Snowflake, TargetKind};
use plaza_service::services::ReactionService;
use plaza_service::{ReactionRequest, ReactionTypeResponse};
use serde::Deserialize;

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters naming one reaction target
#[derive(Debug, Deserialize)]
pub struct TargetQuery {
    pub target_id: String,
    pub target_type: TargetKind,
}

/// Query parameters naming one viewer's reaction on one target
#[derive(Debug, Deserialize)]
pub struct ViewerTargetQuery {
    pub viewer_id: String,
    pub target_id: String,
    pub target_type: TargetKind,
}

fn parse_id(value: &str, what: &'static str) -> Result<Snowflake, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::invalid_query(format!("Invalid {what} format")))
}

/// Create a reaction (upsert semantics)
///
/// POST /reactions
pub async fn create_reaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<Created<NoContent>> {
    let service = ReactionService::new(state.service_context());
    service
        .upsert_reaction(
            request.viewer_id,
            request.target_id,
            request.target_type,
            request.reaction_type_id,
        )
        .await?;
    Ok(Created(NoContent))
}

/// Replace an existing reaction's type
///
/// PUT /reactions
pub async fn update_reaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<NoContent> {
    let service = ReactionService::new(state.service_context());
    service
        .upsert_reaction(
            request.viewer_id,
            request.target_id,
            request.target_type,
            request.reaction_type_id,
        )
        .await?;
    Ok(NoContent)
}

/// Remove the viewer's reaction from a target
///
/// DELETE /reactions
pub async fn delete_reaction(
    State(state): State<AppState>,
    Query(query): Query<ViewerTargetQuery>,
) -> ApiResult<NoContent> {
    let viewer_id = parse_id(&query.viewer_id, "viewer_id")?;
    let target_id = parse_id(&query.target_id, "target_id")?;

    let service = ReactionService::new(state.service_context());
    service
        .delete_reaction(viewer_id, target_id, query.target_type)
        .await?;
    Ok(NoContent)
}

/// Per-type reaction counts for a target (sparse map)
///
/// GET /reactions/counts
pub async fn get_reaction_counts(
    State(state): State<AppState>,
    Query(query): Query<TargetQuery>,
) -> ApiResult<Json<BTreeMap<String, i64>>> {
    let target_id = parse_id(&query.target_id, "target_id")?;

    let service = ReactionService::new(state.service_context());
    let counts = service
        .counts_for_target(target_id, query.target_type)
        .await?;
    Ok(Json(counts))
}

/// The viewer's own reaction-type name on a target, null when absent
///
/// GET /reactions/viewer
pub async fn get_viewer_reaction(
    State(state): State<AppState>,
    Query(query): Query<ViewerTargetQuery>,
) -> ApiResult<Json<Option<String>>> {
    let viewer_id = parse_id(&query.viewer_id, "viewer_id")?;
    let target_id = parse_id(&query.target_id, "target_id")?;

    let service = ReactionService::new(state.service_context());
    let reaction = service
        .viewer_reaction(viewer_id, target_id, query.target_type)
        .await?;
    Ok(Json(reaction))
}

/// The reaction vocabulary
///
/// GET /reaction-types
pub async fn list_reaction_types(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReactionTypeResponse>>> {
    let service = ReactionService::new(state.service_context());
    let types = service.list_reaction_types().await?;
    Ok(Json(types))
}
