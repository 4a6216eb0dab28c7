//! Cart route handlers.
//!
//! The cart lives in the session, keyed by [`session_keys::CART`]. Prices
//! and titles are snapshotted into the cart at add time, so later catalog
//! edits never change a cart line. Every handler requires a logged-in user
//! with the purchase capability; guests only browse.

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::info;

use motionmart_catalog::{Cart, CartItem};
use motionmart_core::{AnimationId, Capability};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{CurrentUser, session_keys};
use crate::state::AppState;

/// Request body naming a catalog entry.
#[derive(Debug, Deserialize)]
pub struct CartLineRequest {
    pub animation_id: AnimationId,
}

/// Cart summary response.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub total_price: Decimal,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

/// Checkout receipt response.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub purchased: Vec<AnimationId>,
    pub total_price: Decimal,
}

fn require_purchase(user: &CurrentUser) -> Result<()> {
    if user.role.allows(Capability::Purchase) {
        Ok(())
    } else {
        Err(AppError::Forbidden("the cart requires an account".into()))
    }
}

/// Load the cart from the session, defaulting to empty.
async fn load_cart(session: &Session) -> Result<Cart> {
    let cart = session
        .get::<Cart>(session_keys::CART)
        .await
        .map_err(|e| AppError::Internal(format!("session read failed: {e}")))?;
    Ok(cart.unwrap_or_default())
}

/// Persist the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session
        .insert(session_keys::CART, cart)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))
}

/// Show the current session cart.
pub async fn show(
    session: Session,
    RequireAuth(user): RequireAuth,
) -> Result<Json<CartResponse>> {
    require_purchase(&user)?;
    let cart = load_cart(&session).await?;
    Ok(Json(CartResponse::from(&cart)))
}

/// Add an animation to the cart, incrementing quantity on repeat adds.
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Json(body): Json<CartLineRequest>,
) -> Result<Json<CartResponse>> {
    require_purchase(&user)?;
    let entry = state
        .catalog()
        .get_animation(body.animation_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("animation {}", body.animation_id)))?;

    let mut cart = load_cart(&session).await?;
    cart.add_item(&entry);
    save_cart(&session, &cart).await?;

    Ok(Json(CartResponse::from(&cart)))
}

/// Remove an entire line from the cart, regardless of quantity.
pub async fn remove(
    session: Session,
    RequireAuth(user): RequireAuth,
    Json(body): Json<CartLineRequest>,
) -> Result<Json<CartResponse>> {
    require_purchase(&user)?;
    let mut cart = load_cart(&session).await?;
    cart.remove_item(body.animation_id);
    save_cart(&session, &cart).await?;

    Ok(Json(CartResponse::from(&cart)))
}

/// Empty the cart.
pub async fn clear(
    session: Session,
    RequireAuth(user): RequireAuth,
) -> Result<Json<CartResponse>> {
    require_purchase(&user)?;
    let mut cart = load_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    Ok(Json(CartResponse::from(&cart)))
}

/// Cart badge count.
pub async fn count(
    session: Session,
    RequireAuth(user): RequireAuth,
) -> Result<Json<serde_json::Value>> {
    require_purchase(&user)?;
    let cart = load_cart(&session).await?;
    Ok(Json(serde_json::json!({ "count": cart.total_items() })))
}

/// Purchase the cart contents.
///
/// Requires a logged-in user with the purchase capability. Records every
/// cart line against the account, then empties the cart.
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
) -> Result<(StatusCode, Json<CheckoutResponse>)> {
    require_purchase(&user)?;

    let mut cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Err(AppError::BadRequest("cart is empty".into()));
    }

    let purchased = cart.item_ids();
    let total_price = cart.total_price();

    if !state.users().record_purchase(user.id, &purchased).await {
        return Err(AppError::Internal("purchase could not be recorded".into()));
    }

    cart.clear();
    save_cart(&session, &cart).await?;

    info!(user = %user.id, count = purchased.len(), %total_price, "checkout completed");

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            purchased,
            total_price,
        }),
    ))
}
