//! Session-related types for admin authentication.

use serde::{Deserialize, Serialize};

use motionmart_core::{Email, User, UserId};

/// Session-stored admin identity.
///
/// Only written after the auth service has verified the admin role, so its
/// presence in the session is the authorization check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's store ID.
    pub id: UserId,
    /// Admin's email address.
    pub email: Email,
}

impl From<&User> for CurrentAdmin {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
