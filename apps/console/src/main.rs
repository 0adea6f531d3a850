//! Console Demo Entry Point
//!
//! Drives the account form pipeline end to end against the simulated
//! gateway: a sign-up attempt that fails validation, the corrected
//! resubmit, then a sign-in. Uses `anyhow` for startup errors; pipeline
//! outcomes resolve on the form sessions.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use account::application::{FormSession, FormsConfig, SignInUseCase, SignUpUseCase};
use account::domain::field;
use account::infra::SimulatedGateway;
use account::presentation::{SIGN_IN_SUBMIT, SIGN_UP_SUBMIT, TracingNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console=info,account=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match env::var("SUBMIT_LATENCY_MS") {
        Ok(ms) => FormsConfig {
            submit_latency: Duration::from_millis(ms.parse()?),
        },
        Err(_) => FormsConfig::default(),
    };
    tracing::info!(
        latency_ms = config.submit_latency_ms(),
        "Starting account form demo"
    );

    let gateway = Arc::new(SimulatedGateway::new(&config));
    let notifier = Arc::new(TracingNotifier);

    // Sign-up: the first attempt has a short password and unaccepted terms
    let sign_up = SignUpUseCase::new(gateway.clone(), notifier.clone());
    let mut session = FormSession::sign_up();
    session.edit(field::FULL_NAME, "Jo Doe");
    session.edit(field::EMAIL, "jo@company.com");
    session.edit(field::PASSWORD, "short");
    session.edit(field::CONFIRM_PASSWORD, "short");

    let state = sign_up.execute(&mut session).await;
    tracing::info!(%state, "First sign-up attempt");
    for (field_name, message) in session.violations().iter() {
        tracing::warn!(field = field_name, message, "Field violation");
    }

    // Fix the form and resubmit
    session.edit(field::PASSWORD, "a-much-longer-password");
    session.edit(field::CONFIRM_PASSWORD, "a-much-longer-password");
    session.edit(field::TERMS, true);
    session.edit(field::COMPANY_NAME, "Acme Warehousing");
    session.edit(field::PLAN, "pro");
    tracing::info!(label = SIGN_UP_SUBMIT.label(&session), "Resubmitting");
    let state = sign_up.execute(&mut session).await;
    tracing::info!(%state, "Second sign-up attempt");

    // Sign in with the fresh account
    let sign_in = SignInUseCase::new(gateway, notifier);
    let mut session = FormSession::sign_in();
    session.edit(field::EMAIL, "jo@company.com");
    session.edit(field::PASSWORD, "a-much-longer-password");
    session.edit(field::REMEMBER_ME, true);
    tracing::info!(label = SIGN_IN_SUBMIT.label(&session), "Submitting sign-in");
    let state = sign_in.execute(&mut session).await;
    tracing::info!(%state, "Sign-in attempt");

    Ok(())
}
