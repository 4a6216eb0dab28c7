//! In-memory service layer for the MotionMart animation marketplace.
//!
//! Stands in for a real backend: catalog, user, cart, and filter logic with
//! `Arc<RwLock>`-guarded state and a simulated per-call latency. Semantics
//! worth knowing:
//!
//! - Missing rows resolve to `Option::None` or `false`, never to an error.
//! - Category and tag `animation_count` fields are derived; every animation
//!   mutation triggers a full recount.
//! - All state resets on process restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

pub mod cart;
pub mod filter;
pub mod seed;
pub mod store;
pub mod users;

pub use cart::{Cart, CartItem};
pub use store::{CatalogService, CategoryUpdate};
pub use users::UserService;

/// Default simulated latency for every service call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);
