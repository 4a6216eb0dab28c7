//! MotionMart Core - Shared types library.
//!
//! This crate provides common types used across all MotionMart components:
//! - `catalog` - In-memory catalog, cart, and user services
//! - `storefront` - Public-facing store API
//! - `admin` - Internal administration API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, emails, catalog entities, and users

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
