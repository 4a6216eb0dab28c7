//! Dashboard route handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Store totals shown on the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub animations: usize,
    pub categories: usize,
    pub tags: usize,
    pub users: usize,
}

/// Show store totals.
pub async fn show(
    State(state): State<AppState>,
    RequireAdminAuth(_admin): RequireAdminAuth,
) -> Json<DashboardResponse> {
    let animations = state.catalog().list_animations().await.len();
    let categories = state.catalog().list_categories().await.len();
    let tags = state.catalog().list_tags().await.len();
    let users = state.users().list().await.len();

    Json(DashboardResponse {
        animations,
        categories,
        tags,
        users,
    })
}
