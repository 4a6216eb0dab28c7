//! Authentication service.
//!
//! Password registration and login on top of the in-memory user store.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use motionmart_catalog::UserService;
use motionmart_core::{AccountStatus, Email, NewUser, User, UserId, UserRole};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles user registration, login, and password changes.
pub struct AuthService<'a> {
    users: &'a UserService,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a UserService) -> Self {
        Self { users }
    }

    /// Register a new user with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn register_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        // Validate email
        let email = Email::parse(email)?;

        // Validate password
        validate_password(password)?;

        if self.users.get_by_email(&email).await.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        // Hash password
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(NewUser {
                email,
                password_hash: Some(password_hash),
                role: UserRole::User,
                first_name: None,
                last_name: None,
                avatar: None,
            })
            .await;

        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    /// Returns `AuthError::AccountBlocked` if the account has been blocked.
    pub async fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        // Validate email format
        let email = Email::parse(email)?;

        let user = self
            .users
            .get_by_email(&email)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        let password_hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, password_hash)?;

        if user.status == AccountStatus::Blocked {
            return Err(AuthError::AccountBlocked);
        }

        Ok(user)
    }

    /// Change a user's password after verifying the current one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CurrentPasswordMismatch` if the current password is wrong.
    /// Returns `AuthError::WeakPassword` if the new password doesn't meet requirements.
    pub async fn change_password(
        &self,
        user_id: UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let user = self
            .users
            .get_by_id(user_id)
            .await
            .ok_or(AuthError::UserNotFound)?;

        let password_hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::CurrentPasswordMismatch)?;
        verify_password(current_password, password_hash)
            .map_err(|_| AuthError::CurrentPasswordMismatch)?;

        validate_password(new_password)?;
        let new_hash = hash_password(new_password)?;

        if self.users.update_password(user_id, new_hash).await {
            Ok(())
        } else {
            Err(AuthError::UserNotFound)
        }
    }
}

/// Validate password strength.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
