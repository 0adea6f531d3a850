//! Presentation Layer
//!
//! The surfaces UI collaborators bind to: transient notifications and the
//! submit control.

pub mod controls;
pub mod notify;

pub use controls::{SIGN_IN_SUBMIT, SIGN_UP_SUBMIT, SubmitControl};
pub use notify::{Notification, Notifier, Severity, TracingNotifier};
