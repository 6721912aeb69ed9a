//! User handlers
//!
//! Minimal account endpoints. Accounts are open; there are no credentials
//! and the service trusts caller-supplied viewer ids.

use axum::{
    extract::{Path, State},
    Json,
};
use plaza_service::services::UserService;
use plaza_service::{AuthorResponse, CreateUserRequest};

use crate::extractors::{UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<AuthorResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service
        .create_user(request.email, request.name, request.role, request.avatar)
        .await?;
    Ok(Created(Json(user)))
}

/// Get one user's author view
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<AuthorResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get_user(path.user_id()?).await?;
    Ok(Json(user))
}
