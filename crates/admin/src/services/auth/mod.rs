//! Admin authentication service.
//!
//! Password login against the shared user store, restricted to accounts
//! whose role carries the store-management capability.

mod error;

pub use error::AdminAuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use motionmart_catalog::UserService;
use motionmart_core::{AccountStatus, Capability, Email, User};

/// Admin authentication service.
pub struct AdminAuthService<'a> {
    users: &'a UserService,
}

impl<'a> AdminAuthService<'a> {
    /// Create a new admin authentication service.
    #[must_use]
    pub const fn new(users: &'a UserService) -> Self {
        Self { users }
    }

    /// Login with email and password, requiring store-management capability.
    ///
    /// # Errors
    ///
    /// Returns `AdminAuthError::InvalidCredentials` if the email/password is wrong.
    /// Returns `AdminAuthError::NotAnAdmin` for valid non-admin accounts.
    /// Returns `AdminAuthError::AccountBlocked` for blocked accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AdminAuthError> {
        let email = Email::parse(email)?;

        let user = self
            .users
            .get_by_email(&email)
            .await
            .ok_or(AdminAuthError::InvalidCredentials)?;

        let password_hash = user
            .password_hash
            .as_deref()
            .ok_or(AdminAuthError::InvalidCredentials)?;
        verify_password(password, password_hash)?;

        if user.status == AccountStatus::Blocked {
            return Err(AdminAuthError::AccountBlocked);
        }
        if !user.role.allows(Capability::ManageStore) {
            return Err(AdminAuthError::NotAnAdmin);
        }

        Ok(user)
    }
}

/// Hash a password using Argon2id. Used for demo account seeding.
///
/// # Errors
///
/// Returns `AdminAuthError::InvalidCredentials` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AdminAuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AdminAuthError::InvalidCredentials)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AdminAuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AdminAuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AdminAuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use motionmart_catalog::seed;
    use std::time::Duration;

    async fn seeded_users() -> UserService {
        let users = UserService::new().with_latency(Duration::ZERO);
        let hash = hash_password("password").unwrap();
        seed::load_users(&users, &hash).await;
        users
    }

    #[tokio::test]
    async fn test_admin_login() {
        let users = seeded_users().await;
        let auth = AdminAuthService::new(&users);

        let user = auth.login("admin@example.com", "password").await.unwrap();
        assert_eq!(user.email.as_str(), "admin@example.com");
    }

    #[tokio::test]
    async fn test_regular_user_rejected() {
        let users = seeded_users().await;
        let auth = AdminAuthService::new(&users);

        let result = auth.login("user@example.com", "password").await;
        assert!(matches!(result, Err(AdminAuthError::NotAnAdmin)));
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let users = seeded_users().await;
        let auth = AdminAuthService::new(&users);

        let result = auth.login("admin@example.com", "not-the-password").await;
        assert!(matches!(result, Err(AdminAuthError::InvalidCredentials)));
    }
}
