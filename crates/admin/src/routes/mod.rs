//! HTTP route handlers for the admin dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /health/ready           - Readiness check
//!
//! # Auth
//! POST /auth/login             - Admin login
//! POST /auth/logout            - Logout
//!
//! # Dashboard
//! GET  /dashboard              - Store totals
//!
//! # Animations
//! GET    /animations           - List all entries
//! POST   /animations           - Create an entry
//! GET    /animations/{id}      - Entry detail
//! PUT    /animations/{id}      - Replace an entry
//! DELETE /animations/{id}      - Delete an entry
//!
//! # Categories
//! GET    /categories           - List with counts
//! POST   /categories           - Create a category record
//! PUT    /categories/{id}      - Update name/description
//! DELETE /categories/{id}      - Delete a category record
//!
//! # Tags
//! GET    /tags                 - List with counts
//! POST   /tags                 - Create a tag
//! DELETE /tags/{id}            - Delete a tag
//!
//! # Users
//! GET    /users                - List accounts
//! GET    /users/{id}           - Account detail
//! PUT    /users/{id}           - Update role and display fields
//! PUT    /users/{id}/status    - Block or reactivate an account
//! DELETE /users/{id}           - Delete an account
//! ```

pub mod animations;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod tags;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the animation management routes router.
pub fn animation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(animations::index).post(animations::create))
        .route(
            "/{id}",
            get(animations::show)
                .put(animations::update)
                .delete(animations::destroy),
        )
}

/// Create the category management routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::create))
        .route(
            "/{id}",
            put(categories::update).delete(categories::destroy),
        )
}

/// Create the tag management routes router.
pub fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tags::index).post(tags::create))
        .route("/{id}", delete(tags::destroy))
}

/// Create the user management routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index))
        .route(
            "/{id}",
            get(users::show).put(users::update).delete(users::destroy),
        )
        .route("/{id}/status", put(users::set_status))
}

/// Create all routes for the admin dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::show))
        .nest("/animations", animation_routes())
        .nest("/categories", category_routes())
        .nest("/tags", tag_routes())
        .nest("/users", user_routes())
        .nest("/auth", auth_routes())
}
