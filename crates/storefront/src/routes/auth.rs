//! Authentication route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::info;

use motionmart_core::UserRole;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Credentials request body.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Identity response after register/login.
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub id: motionmart_core::UserId,
    pub email: String,
    pub role: UserRole,
}

impl From<&CurrentUser> for IdentityResponse {
    fn from(user: &CurrentUser) -> Self {
        Self {
            id: user.id,
            email: user.email.to_string(),
            role: user.role,
        }
    }
}

/// Register a new account and log it in.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<IdentityResponse>)> {
    let auth = AuthService::new(state.users());
    let user = auth
        .register_with_password(&body.email, &body.password)
        .await?;

    let current = CurrentUser::from(&user);
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;
    set_sentry_user(&current.id, Some(current.email.as_str()));

    info!(user = %current.id, "account registered");
    Ok((StatusCode::CREATED, Json(IdentityResponse::from(&current))))
}

/// Login with email and password.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<IdentityResponse>> {
    let auth = AuthService::new(state.users());
    let user = auth
        .login_with_password(&body.email, &body.password)
        .await?;

    // Rotate the session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session rotation failed: {e}")))?;

    let current = CurrentUser::from(&user);
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;
    set_sentry_user(&current.id, Some(current.email.as_str()));

    info!(user = %current.id, "login");
    Ok(Json(IdentityResponse::from(&current)))
}

/// Current session identity. Guests get `null`.
pub async fn me(OptionalAuth(user): OptionalAuth) -> Json<Option<IdentityResponse>> {
    Json(user.as_ref().map(IdentityResponse::from))
}

/// Logout, dropping the session identity. The visitor becomes a guest again.
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;
    clear_sentry_user();

    Ok(StatusCode::NO_CONTENT)
}
