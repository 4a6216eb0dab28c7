//! User management route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use motionmart_core::{AccountStatus, User, UserId, UserRole};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Status change request body.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: AccountStatus,
}

/// Account update request body; absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UserUpdateRequest {
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// List accounts. Password hashes never serialize.
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Json<Vec<User>> {
    Json(state.users().list().await)
}

/// Account detail.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
    Path(id): Path<UserId>,
) -> Result<Json<User>> {
    state
        .users()
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))
}

/// Update an account's role and display fields. Admins cannot demote
/// themselves.
pub async fn update(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Path(id): Path<UserId>,
    Json(body): Json<UserUpdateRequest>,
) -> Result<Json<User>> {
    if admin.id == id && body.role.is_some_and(|role| role != UserRole::Admin) {
        return Err(AppError::BadRequest(
            "cannot demote your own account".into(),
        ));
    }

    let mut user = state
        .users()
        .get_by_id(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    if let Some(role) = body.role {
        user.role = role;
    }
    if let Some(first_name) = body.first_name {
        user.first_name = Some(first_name);
    }
    if let Some(last_name) = body.last_name {
        user.last_name = Some(last_name);
    }
    if let Some(avatar) = body.avatar {
        user.avatar = Some(avatar);
    }

    state
        .users()
        .update(user)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))
}

/// Block or reactivate an account. Admins cannot block themselves.
pub async fn set_status(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Path(id): Path<UserId>,
    Json(body): Json<StatusRequest>,
) -> Result<Json<User>> {
    if admin.id == id && body.status == AccountStatus::Blocked {
        return Err(AppError::BadRequest(
            "cannot block your own account".into(),
        ));
    }

    state
        .users()
        .set_status(id, body.status)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))
}

/// Delete an account. Admins cannot delete themselves.
pub async fn destroy(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Path(id): Path<UserId>,
) -> Result<StatusCode> {
    if admin.id == id {
        return Err(AppError::BadRequest(
            "cannot delete your own account".into(),
        ));
    }

    if state.users().delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("user {id}")))
    }
}
