//! Admin authentication route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::info;

use motionmart_core::UserId;

use crate::error::{AppError, Result};
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::auth::AdminAuthService;
use crate::state::AppState;

/// Credentials request body.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Identity response after login.
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub id: UserId,
    pub email: String,
}

/// Admin login.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<IdentityResponse>> {
    let auth = AdminAuthService::new(state.users());
    let user = auth.login(&body.email, &body.password).await?;

    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session rotation failed: {e}")))?;

    let admin = CurrentAdmin::from(&user);
    set_current_admin(&session, &admin)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    info!(admin = %admin.id, "admin login");
    Ok(Json(IdentityResponse {
        id: admin.id,
        email: admin.email.to_string(),
    }))
}

/// Admin logout.
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;
    Ok(StatusCode::NO_CONTENT)
}
