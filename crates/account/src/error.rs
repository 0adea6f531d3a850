//! Account Error Types
//!
//! This module provides the account-operation error variants that integrate
//! with the unified `kernel::error::AppError` system. The simulated gateway
//! never produces them; they exist so a real backend reports failures
//! through the same state machine.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-operation result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-operation error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Credentials rejected by the backend
    #[error("Invalid email or password")]
    CredentialsRejected,

    /// An account already exists for the submitted email
    #[error("An account with this email already exists")]
    DuplicateAccount,

    /// Backend temporarily unreachable
    #[error("Service temporarily unavailable")]
    Unavailable,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::CredentialsRejected => ErrorKind::Rejected,
            AccountError::DuplicateAccount => ErrorKind::Conflict,
            AccountError::Unavailable => ErrorKind::Unavailable,
            AccountError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError, attaching the suggested user action
    pub fn to_app_error(&self) -> AppError {
        let error = AppError::new(self.kind(), self.to_string());
        match self {
            AccountError::CredentialsRejected => {
                error.with_action("Check your email and password, then try again")
            }
            AccountError::DuplicateAccount => error.with_action("Try signing in instead"),
            AccountError::Unavailable => error.with_action("Please try again in a moment"),
            AccountError::Internal(_) => error,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AccountError::Internal(message) => {
                tracing::error!(message = %message, "Account operation failed");
            }
            AccountError::Unavailable => {
                tracing::warn!("Account service unavailable");
            }
            AccountError::CredentialsRejected => {
                tracing::warn!("Sign-in rejected");
            }
            AccountError::DuplicateAccount => {
                tracing::debug!(error = %self, "Duplicate account");
            }
        }
    }
}
