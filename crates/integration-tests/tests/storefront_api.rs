//! HTTP integration tests for the storefront API.
//!
//! These tests require the storefront server running
//! (cargo run -p motionmart-storefront) with seeded demo data.
//!
//! Run with: cargo test -p motionmart-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the storefront API (configurable via environment).
fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create a client with a cookie store so the session persists across calls.
fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in as the seeded demo member.
async fn login_demo_member(client: &Client) {
    let base_url = storefront_base_url();
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "email": "user@example.com", "password": "password" }))
        .send()
        .await
        .expect("login request");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health() {
    let resp = session_client()
        .get(format!("{}/health", storefront_base_url()))
        .send()
        .await
        .expect("health request");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_animation_listing_and_filters() {
    let client = session_client();
    let base_url = storefront_base_url();

    let all: Value = client
        .get(format!("{base_url}/animations"))
        .send()
        .await
        .expect("listing request")
        .json()
        .await
        .expect("listing body");
    assert_eq!(all["total"], 9);

    let free: Value = client
        .get(format!("{base_url}/animations?price=free"))
        .send()
        .await
        .expect("filter request")
        .json()
        .await
        .expect("filter body");
    assert_eq!(free["total"], 5);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_animation_detail_includes_related() {
    let client = session_client();
    let base_url = storefront_base_url();

    let detail: Value = client
        .get(format!("{base_url}/animations/1"))
        .send()
        .await
        .expect("detail request")
        .json()
        .await
        .expect("detail body");

    assert_eq!(detail["animation"]["title"], "Fade In");
    assert_eq!(detail["related"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_guest_cannot_use_cart() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .json(&json!({ "animation_id": 1 }))
        .send()
        .await
        .expect("cart add request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("cart show request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_guest_cannot_checkout() {
    let client = session_client();
    let resp = client
        .post(format!("{}/checkout", storefront_base_url()))
        .send()
        .await
        .expect("checkout request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_cart_add_and_checkout_flow() {
    let client = session_client();
    let base_url = storefront_base_url();
    login_demo_member(&client).await;

    // Add the premium Flip Card entry twice
    for _ in 0..2 {
        let resp = client
            .post(format!("{base_url}/cart/add"))
            .json(&json!({ "animation_id": 5 }))
            .send()
            .await
            .expect("cart add");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("cart show")
        .json()
        .await
        .expect("cart body");
    assert_eq!(cart["total_items"], 2);

    let resp = client
        .post(format!("{base_url}/checkout"))
        .send()
        .await
        .expect("checkout");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // The cart is empty afterwards and the purchase shows in downloads
    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("cart show")
        .json()
        .await
        .expect("cart body");
    assert_eq!(cart["total_items"], 0);

    let downloads: Value = client
        .get(format!("{base_url}/account/downloads"))
        .send()
        .await
        .expect("downloads")
        .json()
        .await
        .expect("downloads body");
    assert!(
        downloads
            .as_array()
            .expect("downloads array")
            .iter()
            .any(|a| a["id"] == 5)
    );
}
