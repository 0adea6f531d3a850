//! Application Error - Unified error type
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.
//!
//! Every error in this workspace is a leaf user-facing value: a kind, a
//! message, and an optional suggested action. Errors are built with the
//! convenience constructors and refined with the builder methods.
//!
//! ## Examples
//! ```rust
//! use kernel::error::app_error::AppError;
//!
//! let err = AppError::rejected("Invalid email or password")
//!     .with_action("Check your email and password, then try again");
//! ```

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified error type for the account form pipeline
///
/// ## Fields
/// * `kind` - error classification
/// * `message` - user-facing message
/// * `action` - suggested user action (optional)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
}

/// Result type alias for `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new error
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
        }
    }

    /// Schema validation error
    #[inline]
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Credential / submission rejection
    #[inline]
    pub fn rejected(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Rejected, message)
    }

    /// Conflict with existing state
    #[inline]
    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Backing service unavailable
    #[inline]
    pub fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unavailable, message)
    }

    /// Internal error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the suggested user action
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The error classification
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The user-facing message
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The suggested user action, if any
    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Whether the user can resolve this error by editing and resubmitting
    #[inline]
    pub fn is_user_error(&self) -> bool {
        self.kind.is_user_error()
    }

    /// Whether retrying the same submission later may succeed
    #[inline]
    pub fn is_transient(&self) -> bool {
        self.kind.is_transient()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {}
