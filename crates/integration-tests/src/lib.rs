//! Integration tests for MotionMart.
//!
//! # Test Categories
//!
//! - `catalog_service` - Catalog store CRUD and derived-count behavior
//! - `cart_flow` - Cart aggregation and checkout flow against the services
//! - `storefront_api` - HTTP tests against a running storefront (ignored by
//!   default; start the server and pass `--ignored`)
//!
//! Service-layer tests build their own zero-latency services, so they need
//! no environment at all.
