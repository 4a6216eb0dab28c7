//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /health/ready           - Readiness check
//!
//! # Catalog
//! GET  /animations             - Animation listing with filters
//! GET  /animations/{id}        - Animation detail with related entries
//! GET  /categories             - Category listing with counts
//!
//! # Cart (requires auth)
//! GET    /cart                 - Current session cart
//! POST   /cart/add             - Add an animation to the cart
//! POST   /cart/remove          - Remove a line from the cart
//! POST   /cart/clear           - Empty the cart
//! GET    /cart/count           - Item count badge
//! POST   /checkout             - Purchase the cart contents
//!
//! # Auth
//! POST /auth/register          - Register with email and password
//! POST /auth/login             - Login
//! POST /auth/logout            - Logout
//! GET  /auth/me                - Current session identity (null for guests)
//!
//! # Account (requires auth)
//! GET  /account                - Profile
//! PUT  /account                - Update profile fields
//! PUT  /account/password       - Change password
//! GET  /account/favorites      - Favorited animations
//! POST /account/favorites/{id} - Favorite an animation
//! DELETE /account/favorites/{id} - Unfavorite an animation
//! GET  /account/downloads      - Purchased animations
//! ```

pub mod account;
pub mod animations;
pub mod auth;
pub mod cart;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn animation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(animations::index))
        .route("/{id}", get(animations::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::profile).put(account::update_profile))
        .route("/password", put(account::change_password))
        .route("/favorites", get(account::favorites))
        .route(
            "/favorites/{id}",
            post(account::add_favorite).delete(account::remove_favorite),
        )
        .route("/downloads", get(account::downloads))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog routes
        .nest("/animations", animation_routes())
        .route("/categories", get(animations::categories))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", post(cart::checkout))
        // Auth routes
        .nest("/auth", auth_routes())
        // Account routes
        .nest("/account", account_routes())
}
