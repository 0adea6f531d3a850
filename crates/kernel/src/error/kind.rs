//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum for the form pipeline's error taxonomy.

use serde::Serialize;

/// Error classification for the account form pipeline
///
/// ## Notes
/// * `non_exhaustive` - more variants may be added as the backend surface grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// One or more schema rules failed at submit time
    Validation,
    /// The backing service rejected the submitted credentials
    Rejected,
    /// The submission conflicts with existing state (e.g. duplicate account)
    Conflict,
    /// The backing service is temporarily unreachable
    Unavailable,
    /// Unexpected internal failure
    Internal,
}

impl ErrorKind {
    /// User-facing string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation Failed",
            ErrorKind::Rejected => "Rejected",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Unavailable => "Service Unavailable",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// Whether the user can resolve this error by editing and resubmitting
    #[inline]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::Validation | ErrorKind::Rejected | ErrorKind::Conflict
        )
    }

    /// Whether retrying the same submission later may succeed
    #[inline]
    pub const fn is_transient(&self) -> bool {
        matches!(self, ErrorKind::Unavailable)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
