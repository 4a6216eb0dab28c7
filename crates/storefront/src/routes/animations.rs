//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use motionmart_core::{
    AnimationCategory, AnimationEntry, AnimationId, Category, Difficulty, FilterCriteria,
    PriceTier,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Number of related entries shown on a detail page.
const RELATED_LIMIT: usize = 3;

/// Filter query parameters for the listing endpoint.
///
/// All fields are optional; an empty query returns the full catalog.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    /// Free-text search over title, description, and tags.
    pub q: Option<String>,
    pub category: Option<AnimationCategory>,
    pub price: Option<PriceTier>,
    pub difficulty: Option<Difficulty>,
}

impl From<FilterQuery> for FilterCriteria {
    fn from(query: FilterQuery) -> Self {
        Self {
            query: query.q.unwrap_or_default(),
            category: query.category,
            price: query.price.unwrap_or_default(),
            difficulty: query.difficulty,
        }
    }
}

/// Listing response.
#[derive(Debug, Serialize)]
pub struct AnimationListResponse {
    pub animations: Vec<AnimationEntry>,
    pub total: usize,
}

/// Detail response with related entries.
#[derive(Debug, Serialize)]
pub struct AnimationDetailResponse {
    pub animation: AnimationEntry,
    pub related: Vec<AnimationEntry>,
}

/// List animations, optionally filtered.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<AnimationListResponse> {
    let criteria = FilterCriteria::from(query);
    let animations = if criteria.is_constrained() {
        state.catalog().search(&criteria).await
    } else {
        state.catalog().list_animations().await
    };

    let total = animations.len();
    Json(AnimationListResponse { animations, total })
}

/// Show a single animation with up to three related entries.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<AnimationId>,
) -> Result<Json<AnimationDetailResponse>> {
    let animation = state
        .catalog()
        .get_animation(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("animation {id}")))?;

    let related = state.catalog().related(&animation, RELATED_LIMIT).await;

    Ok(Json(AnimationDetailResponse { animation, related }))
}

/// List categories with live animation counts.
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog().list_categories().await)
}
