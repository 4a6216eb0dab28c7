//! Account route handlers.
//!
//! All handlers require a logged-in user via [`RequireAuth`]. Capability
//! checks go through `UserRole::allows` so guests and future roles are
//! handled in one place.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use motionmart_core::{AnimationEntry, AnimationId, Capability, ProfileUpdate, User};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::CurrentUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Password change request body.
#[derive(Debug, Deserialize)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

fn require_manage_account(user: &CurrentUser) -> Result<()> {
    if user.role.allows(Capability::ManageAccount) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "account management requires an account".into(),
        ))
    }
}

async fn load_user(state: &AppState, current: &CurrentUser) -> Result<User> {
    state
        .users()
        .get_by_id(current.id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("user {}", current.id)))
}

/// Current profile. The password hash never serializes.
pub async fn profile(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
) -> Result<Json<User>> {
    require_manage_account(&current)?;
    let user = load_user(&state, &current).await?;
    Ok(Json(user))
}

/// Update display fields; absent fields are left untouched.
pub async fn update_profile(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<User>> {
    require_manage_account(&current)?;
    let user = state
        .users()
        .update_profile(current.id, update)
        .await
        .ok_or_else(|| AppError::NotFound(format!("user {}", current.id)))?;
    Ok(Json(user))
}

/// Change password after verifying the current one.
pub async fn change_password(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Json(body): Json<PasswordChangeRequest>,
) -> Result<StatusCode> {
    require_manage_account(&current)?;
    let auth = AuthService::new(state.users());
    auth.change_password(current.id, &body.current_password, &body.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Favorited animations, joined against the catalog.
pub async fn favorites(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
) -> Result<Json<Vec<AnimationEntry>>> {
    require_manage_account(&current)?;
    let ids = state.users().favorite_ids(current.id).await;
    Ok(Json(state.catalog().animations_by_ids(&ids).await))
}

/// Favorite an animation. Repeat favorites are a no-op conflict.
pub async fn add_favorite(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Path(id): Path<AnimationId>,
) -> Result<StatusCode> {
    require_manage_account(&current)?;

    // Favorite only entries that exist
    if state.catalog().get_animation(id).await.is_none() {
        return Err(AppError::NotFound(format!("animation {id}")));
    }

    if state.users().add_favorite(current.id, id).await {
        Ok(StatusCode::CREATED)
    } else {
        Ok(StatusCode::NO_CONTENT)
    }
}

/// Unfavorite an animation.
pub async fn remove_favorite(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Path(id): Path<AnimationId>,
) -> Result<StatusCode> {
    require_manage_account(&current)?;
    state.users().remove_favorite(current.id, id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Purchased animations, joined against the catalog.
pub async fn downloads(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
) -> Result<Json<Vec<AnimationEntry>>> {
    require_manage_account(&current)?;
    let ids = state.users().purchased_ids(current.id).await;
    Ok(Json(state.catalog().animations_by_ids(&ids).await))
}
