//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] motionmart_core::EmailError),

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User not found.
    #[error("user not found")]
    UserNotFound,

    /// Wrong current password on a password change. A validation failure,
    /// not an authentication failure: the caller is already logged in.
    #[error("current password is incorrect")]
    CurrentPasswordMismatch,

    /// User already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Account is blocked.
    #[error("account blocked")]
    AccountBlocked,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
