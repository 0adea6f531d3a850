//! Notification Surface
//!
//! Transient toast events emitted by the submit pipeline and consumed by a
//! notification collaborator outside this crate.

use kernel::error::app_error::AppError;
use serde::Serialize;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A transient notification: title plus optional description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    /// Success notification
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            description: None,
        }
    }

    /// Error notification
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: None,
        }
    }

    /// Set the description line
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Error notification for a failed account operation; the error's
    /// suggested action becomes the description.
    pub fn from_app_error(error: &AppError) -> Self {
        Self {
            severity: Severity::Error,
            title: error.message().to_string(),
            description: error.action().map(str::to_string),
        }
    }
}

/// Sink for transient notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let description = notification.description.as_deref().unwrap_or("");
        match notification.severity {
            Severity::Success => {
                tracing::info!(title = %notification.title, description, "notification");
            }
            Severity::Error => {
                tracing::warn!(title = %notification.title, description, "notification");
            }
        }
    }
}
