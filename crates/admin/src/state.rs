//! Application state shared across handlers.

use std::sync::Arc;

use motionmart_catalog::{CatalogService, UserService};

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    catalog: CatalogService,
    users: UserService,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AdminConfig, catalog: CatalogService, users: UserService) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                users,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
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
