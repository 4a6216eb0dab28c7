//! User types, roles, and the central capability check.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::{AnimationId, UserId};

/// Account role.
///
/// Guest is a sentinel identity, not a stored account; access control treats
/// guest and unauthenticated as equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Guest,
    User,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Guest => write!(f, "guest"),
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Things a role may do.
///
/// Route handlers gate on this single check instead of scattering role
/// comparisons across the codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Browse and search the public catalog.
    BrowseCatalog,
    /// Hold a cart and check out.
    Purchase,
    /// View and edit own account, favorites, and downloads.
    ManageAccount,
    /// Administer animations, categories, tags, and users.
    ManageStore,
}

impl UserRole {
    /// Whether this role is allowed the given capability.
    #[must_use]
    pub const fn allows(self, capability: Capability) -> bool {
        match capability {
            Capability::BrowseCatalog => true,
            Capability::Purchase | Capability::ManageAccount => {
                matches!(self, Self::User | Self::Admin)
            }
            Capability::ManageStore => matches!(self, Self::Admin),
        }
    }
}

/// Whether an account can log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Blocked,
}

/// A user account.
///
/// The password hash never leaves the service layer; API views redact it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    #[serde(default, skip_serializing)]
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub registered_at: NaiveDate,
    pub status: AccountStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub purchased: Vec<AnimationId>,
    #[serde(default)]
    pub favorites: Vec<AnimationId>,
}

impl User {
    /// The guest sentinel identity used when no session exists.
    ///
    /// Not a stored account; `id` 0 is never assigned to real users.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            id: UserId::new(0),
            email: Email::parse("guest@example.com").unwrap_or_else(|_| unreachable!()),
            password_hash: None,
            role: UserRole::Guest,
            registered_at: NaiveDate::default(),
            status: AccountStatus::Active,
            first_name: None,
            last_name: None,
            avatar: None,
            purchased: Vec::new(),
            favorites: Vec::new(),
        }
    }

    /// Whether this is the guest sentinel.
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        matches!(self.role, UserRole::Guest)
    }
}

/// Payload for creating a user; the directory assigns id, registration
/// date, and active status.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
}

/// Profile fields a user may edit about themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}
