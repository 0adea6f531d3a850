//! Simulated Account Gateway
//!
//! Stand-in for the real account backend: a fixed-latency round trip that
//! always succeeds. The accepted record is echoed to the log; that echo is
//! the only downstream use of the pass-through fields (`rememberMe`,
//! `companyName`).

use std::time::Duration;

use crate::application::config::FormsConfig;
use crate::domain::gateway::AccountGateway;
use crate::domain::sign_in::SignInRecord;
use crate::domain::sign_up::SignUpRecord;
use crate::error::AccountResult;

/// Fixed-latency, always-successful account gateway
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
}

impl SimulatedGateway {
    pub fn new(config: &FormsConfig) -> Self {
        Self {
            latency: config.submit_latency,
        }
    }
}

impl AccountGateway for SimulatedGateway {
    async fn sign_in(&self, record: &SignInRecord) -> AccountResult<()> {
        tokio::time::sleep(self.latency).await;
        tracing::info!(
            email = %record.email,
            remember_me = record.remember_me,
            "Simulated sign-in accepted"
        );
        Ok(())
    }

    async fn sign_up(&self, record: &SignUpRecord) -> AccountResult<()> {
        tokio::time::sleep(self.latency).await;
        tracing::info!(
            email = %record.email,
            full_name = %record.full_name,
            company_name = record.company_name.as_deref().unwrap_or(""),
            plan = %record.plan,
            "Simulated sign-up accepted"
        );
        Ok(())
    }
}
