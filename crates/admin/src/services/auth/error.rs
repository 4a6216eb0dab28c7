//! Admin authentication error types.

use thiserror::Error;

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AdminAuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] motionmart_core::EmailError),

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Authenticated, but the account lacks the store-management capability.
    #[error("not an admin")]
    NotAnAdmin,

    /// Account is blocked.
    #[error("account blocked")]
    AccountBlocked,
}
