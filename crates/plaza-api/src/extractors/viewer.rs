//! Viewer identity extractor
//!
//! Reads the optional `viewer_id` query parameter that personalizes read
//! responses (the viewer's own reaction per target). The value is trusted
//! as-is: authentication is out of scope for this service.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use plaza_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct ViewerParams {
    #[serde(default)]
    viewer_id: Option<String>,
}

/// Optional viewer identity from the query string
#[derive(Debug, Clone, Copy)]
pub struct Viewer(pub Option<Snowflake>);

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ViewerParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let viewer = params
            .viewer_id
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid viewer_id format"))
            })
            .transpose()?;

        Ok(Viewer(viewer))
    }
}
