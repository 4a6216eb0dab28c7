//! Category management route handlers.
//!
//! The `animation_count` on a category is derived; create and update bodies
//! never carry it.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use motionmart_core::{AnimationCategory, Category, CategoryId};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;
use motionmart_catalog::CategoryUpdate;

/// Category create/update request body.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: AnimationCategory,
    pub description: String,
}

/// List categories with live counts.
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Json<Vec<Category>> {
    Json(state.catalog().list_categories().await)
}

/// Create a category record.
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Json(body): Json<CategoryRequest>,
) -> (StatusCode, Json<Category>) {
    let category = state
        .catalog()
        .create_category(body.name, body.description)
        .await;
    (StatusCode::CREATED, Json(category))
}

/// Update a category's name and description.
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<CategoryId>,
    Json(body): Json<CategoryRequest>,
) -> Result<Json<Category>> {
    state
        .catalog()
        .update_category(
            id,
            CategoryUpdate {
                name: body.name,
                description: body.description,
            },
        )
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))
}

/// Delete a category record.
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode> {
    if state.catalog().delete_category(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("category {id}")))
    }
}
