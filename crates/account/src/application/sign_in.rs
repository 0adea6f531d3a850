//! Sign In Use Case
//!
//! Drives a sign-in submit through validate -> submit -> report.

use std::sync::Arc;

use crate::application::CHECK_FORM_MESSAGE;
use crate::application::session::{FormSession, FormState};
use crate::domain::gateway::AccountGateway;
use crate::domain::sign_in::SignInRecord;
use crate::domain::validate::validate;
use crate::error::AccountError;
use crate::presentation::notify::{Notification, Notifier};

/// Sign in use case
pub struct SignInUseCase<G, N>
where
    G: AccountGateway,
    N: Notifier,
{
    gateway: Arc<G>,
    notifier: Arc<N>,
}

impl<G, N> SignInUseCase<G, N>
where
    G: AccountGateway,
    N: Notifier,
{
    pub fn new(gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self { gateway, notifier }
    }

    /// Drive one submit request. Every outcome resolves on the session:
    /// violations and errors are stored there, notifications go out through
    /// the notifier, and nothing escapes to the caller beyond the state.
    pub async fn execute(&self, session: &mut FormSession) -> FormState {
        if !session.begin_submit() {
            tracing::debug!("sign-in submit ignored, already in flight");
            return session.state();
        }

        let normalized = match validate(session.schema(), session.values()) {
            Ok(normalized) => normalized,
            Err(violations) => {
                tracing::debug!(violations = violations.len(), "sign-in validation failed");
                session.fail_validation(violations);
                self.notifier.notify(Notification::error(CHECK_FORM_MESSAGE));
                return session.state();
            }
        };

        let record = match SignInRecord::from_normalized(&normalized) {
            Ok(record) => record,
            Err(e) => return self.reject(session, AccountError::Internal(e.to_string())),
        };

        match self.gateway.sign_in(&record).await {
            Ok(()) => {
                session.succeed();
                tracing::info!(
                    email = %record.email,
                    remember_me = record.remember_me,
                    "User signed in"
                );
                self.notifier.notify(
                    Notification::success("Login successful!")
                        .with_description("Welcome back to AI Inventory System"),
                );
            }
            Err(e) => return self.reject(session, e),
        }

        session.state()
    }

    fn reject(&self, session: &mut FormSession, error: AccountError) -> FormState {
        error.log();
        let error = error.to_app_error();
        self.notifier.notify(Notification::from_app_error(&error));
        session.fail_operation(error);
        session.state()
    }
}
