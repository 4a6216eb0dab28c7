//! Integration tests for the cart and purchase flow.
//!
//! Drives a cart against the seeded catalog and records the purchase on a
//! seeded account the way the storefront checkout handler does.

use std::time::Duration;

use rust_decimal::Decimal;

use motionmart_catalog::{Cart, CatalogService, UserService, seed};
use motionmart_core::{AnimationId, Capability, Email, UserRole};

async fn seeded_services() -> (CatalogService, UserService) {
    let catalog = CatalogService::new().with_latency(Duration::ZERO);
    seed::load_catalog(&catalog).await;
    let users = UserService::new().with_latency(Duration::ZERO);
    seed::load_users(&users, "$argon2id$stub").await;
    (catalog, users)
}

#[tokio::test]
async fn test_cart_totals_across_seeded_entries() {
    let (catalog, _users) = seeded_services().await;

    let pulse = catalog.get_animation(AnimationId::new(3)).await.expect("Pulse");
    let flip = catalog.get_animation(AnimationId::new(5)).await.expect("Flip Card");

    let mut cart = Cart::default();
    cart.add_item(&pulse); // $5
    cart.add_item(&pulse); // quantity 2, still one line
    cart.add_item(&flip); // $10

    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), Decimal::from(20));

    cart.remove_item(pulse.id);
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price(), Decimal::from(10));
}

#[tokio::test]
async fn test_free_entries_cost_nothing() {
    let (catalog, _users) = seeded_services().await;

    let fade_in = catalog.get_animation(AnimationId::new(1)).await.expect("Fade In");
    let mut cart = Cart::default();
    cart.add_item(&fade_in);

    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price(), Decimal::ZERO);
}

#[tokio::test]
async fn test_checkout_records_purchases_and_clears_cart() {
    let (catalog, users) = seeded_services().await;

    let member = users
        .get_by_email(&Email::parse("user@example.com").expect("email"))
        .await
        .expect("seeded member");
    assert!(member.role.allows(Capability::Purchase));

    let text_wave = catalog.get_animation(AnimationId::new(6)).await.expect("Text Wave");
    let shimmer = catalog.get_animation(AnimationId::new(8)).await.expect("Shimmer");

    let mut cart = Cart::default();
    cart.add_item(&text_wave);
    cart.add_item(&shimmer);

    assert!(users.record_purchase(member.id, &cart.item_ids()).await);
    cart.clear();

    assert!(cart.is_empty());
    let purchased = users.purchased_ids(member.id).await;
    // Pulse was seeded as already owned
    assert_eq!(
        purchased,
        vec![AnimationId::new(3), AnimationId::new(6), AnimationId::new(8)]
    );

    // Buying Pulse again does not duplicate it
    assert!(users.record_purchase(member.id, &[AnimationId::new(3)]).await);
    assert_eq!(users.purchased_ids(member.id).await.len(), 3);
}

#[tokio::test]
async fn test_guest_role_cannot_purchase() {
    let guest = motionmart_core::User::guest();
    assert_eq!(guest.role, UserRole::Guest);
    assert!(guest.role.allows(Capability::BrowseCatalog));
    assert!(!guest.role.allows(Capability::Purchase));
    assert!(!guest.role.allows(Capability::ManageAccount));
    assert!(!guest.role.allows(Capability::ManageStore));
}

#[tokio::test]
async fn test_cart_snapshot_survives_catalog_edit() {
    let (catalog, _users) = seeded_services().await;

    let pulse = catalog.get_animation(AnimationId::new(3)).await.expect("Pulse");
    let mut cart = Cart::default();
    cart.add_item(&pulse);

    // Reprice the catalog entry after the line was added
    let mut repriced = pulse.clone();
    repriced.price = motionmart_core::Price::new("$99");
    catalog.update_animation(repriced).await.expect("update");

    assert_eq!(cart.total_price(), Decimal::from(5));
}
