//! Application state shared across handlers.

use std::sync::Arc;

use motionmart_catalog::{CatalogService, UserService};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// in-memory services and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogService,
    users: UserService,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: CatalogService, users: UserService) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                users,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the user service.
    #[must_use]
    pub fn users(&self) -> &UserService {
        &self.inner.users
    }
}
