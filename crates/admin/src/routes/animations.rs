//! Animation management route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use motionmart_core::{AnimationEntry, AnimationId, NewAnimation};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// List all catalog entries.
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Json<Vec<AnimationEntry>> {
    Json(state.catalog().list_animations().await)
}

/// Create a catalog entry; the store assigns the id.
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(new): Json<NewAnimation>,
) -> (StatusCode, Json<AnimationEntry>) {
    let entry = state.catalog().create_animation(new).await;
    (StatusCode::CREATED, Json(entry))
}

/// Entry detail.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<AnimationId>,
) -> Result<Json<AnimationEntry>> {
    state
        .catalog()
        .get_animation(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("animation {id}")))
}

/// Replace an entry. The path id wins over any id in the body.
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<AnimationId>,
    Json(fields): Json<NewAnimation>,
) -> Result<Json<AnimationEntry>> {
    let entry = fields.into_entry(id);
    state
        .catalog()
        .update_animation(entry)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("animation {id}")))
}

/// Delete an entry.
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<AnimationId>,
) -> Result<StatusCode> {
    if state.catalog().delete_animation(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("animation {id}")))
    }
}
