//! Sign Up Use Case
//!
//! Drives a sign-up submit through validate -> submit -> report.

use std::sync::Arc;

use crate::application::CHECK_FORM_MESSAGE;
use crate::application::session::{FormSession, FormState};
use crate::domain::gateway::AccountGateway;
use crate::domain::sign_up::SignUpRecord;
use crate::domain::validate::validate;
use crate::error::AccountError;
use crate::presentation::notify::{Notification, Notifier};

/// Sign up use case
pub struct SignUpUseCase<G, N>
where
    G: AccountGateway,
    N: Notifier,
{
    gateway: Arc<G>,
    notifier: Arc<N>,
}

impl<G, N> SignUpUseCase<G, N>
where
    G: AccountGateway,
    N: Notifier,
{
    pub fn new(gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self { gateway, notifier }
    }

    /// Drive one submit request. See [`crate::application::sign_in`] for the
    /// shared flow; the schemas, record type and notifications differ.
    pub async fn execute(&self, session: &mut FormSession) -> FormState {
        if !session.begin_submit() {
            tracing::debug!("sign-up submit ignored, already in flight");
            return session.state();
        }

        let normalized = match validate(session.schema(), session.values()) {
            Ok(normalized) => normalized,
            Err(violations) => {
                tracing::debug!(violations = violations.len(), "sign-up validation failed");
                session.fail_validation(violations);
                self.notifier.notify(Notification::error(CHECK_FORM_MESSAGE));
                return session.state();
            }
        };

        let record = match SignUpRecord::from_normalized(&normalized) {
            Ok(record) => record,
            Err(e) => return self.reject(session, AccountError::Internal(e.to_string())),
        };

        match self.gateway.sign_up(&record).await {
            Ok(()) => {
                session.succeed();
                tracing::info!(
                    email = %record.email,
                    plan = %record.plan,
                    "User signed up"
                );
                self.notifier.notify(
                    Notification::success("Account created successfully!")
                        .with_description("Welcome to AI Inventory System"),
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
