//! Tag management route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use motionmart_core::{Tag, TagId};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Tag create request body.
#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub name: String,
}

/// List tags with live counts.
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Json<Vec<Tag>> {
    Json(state.catalog().list_tags().await)
}

/// Create a tag.
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(body): Json<TagRequest>,
) -> Result<(StatusCode, Json<Tag>)> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("tag name cannot be empty".into()));
    }
    let tag = state.catalog().create_tag(body.name).await;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// Delete a tag.
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<TagId>,
) -> Result<StatusCode> {
    if state.catalog().delete_tag(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("tag {id}")))
    }
}
