//! Submit Control Surface
//!
//! The session's busy flag is the sole signal for disabling the submit
//! control and swapping its caption.

use crate::application::session::FormSession;

/// Captions for a form's submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub idle_label: &'static str,
    pub busy_label: &'static str,
}

/// Sign-in page submit control
pub static SIGN_IN_SUBMIT: SubmitControl = SubmitControl {
    idle_label: "Sign In",
    busy_label: "Signing In...",
};

/// Sign-up page submit control
pub static SIGN_UP_SUBMIT: SubmitControl = SubmitControl {
    idle_label: "Create Account",
    busy_label: "Creating Account...",
};

impl SubmitControl {
    /// Caption to render for the session's current state
    pub fn label(&self, session: &FormSession) -> &'static str {
        if session.is_submitting() {
            self.busy_label
        } else {
            self.idle_label
        }
    }

    /// Whether the control should refuse clicks
    pub fn disabled(&self, session: &FormSession) -> bool {
        session.is_submitting()
    }
}
