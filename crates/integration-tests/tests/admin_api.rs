//! HTTP integration tests for the admin API.
//!
//! These tests require the admin server running
//! (cargo run -p motionmart-admin) with seeded demo data.
//!
//! Run with: cargo test -p motionmart-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the admin API (configurable via environment).
fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Create a client with a cookie store so the session persists across calls.
fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in as the seeded admin account.
async fn login_admin(client: &Client) {
    let base_url = admin_base_url();
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": "admin@example.com", "password": "password" }))
        .send()
        .await
        .expect("login request");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_user_update_requires_login() {
    let resp = session_client()
        .put(format!("{}/users/2", admin_base_url()))
        .json(&json!({ "role": "admin" }))
        .send()
        .await
        .expect("update request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_user_role_management() {
    let client = session_client();
    let base_url = admin_base_url();
    login_admin(&client).await;

    // Promote the seeded member and set a display name
    let updated: Value = client
        .put(format!("{base_url}/users/2"))
        .json(&json!({ "role": "admin", "first_name": "Demo" }))
        .send()
        .await
        .expect("update request")
        .json()
        .await
        .expect("update body");
    assert_eq!(updated["role"], "admin");
    assert_eq!(updated["first_name"], "Demo");

    // Demote back so the seeded state is restored
    let restored: Value = client
        .put(format!("{base_url}/users/2"))
        .json(&json!({ "role": "user" }))
        .send()
        .await
        .expect("restore request")
        .json()
        .await
        .expect("restore body");
    assert_eq!(restored["role"], "user");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_admin_cannot_demote_self() {
    let client = session_client();
    let base_url = admin_base_url();
    login_admin(&client).await;

    let resp = client
        .put(format!("{base_url}/users/1"))
        .json(&json!({ "role": "user" }))
        .send()
        .await
        .expect("self-demotion request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
