//! Account Entry Module
//!
//! The form pipeline behind the sign-in and sign-up pages.
//!
//! Clean Architecture structure:
//! - `domain/` - Schema rule tables, the pure validator, typed records,
//!   value objects, gateway port
//! - `application/` - Form session state machine and submit use cases
//! - `infra/` - Simulated account gateway
//! - `presentation/` - Notification and submit-control surfaces
//!
//! ## Features
//! - Declarative per-field and cross-field validation with one message per
//!   field (first failing rule wins)
//! - Explicit submit lifecycle (Idle / Submitting / Succeeded / Failed)
//!   with a re-entrancy guard around the account operation
//! - Asynchronous account round trip isolated behind [`AccountGateway`],
//!   so a real backend client is a drop-in replacement
//!
//! ## Error Model
//! Every error resolves on the [`FormSession`]: field violations surface
//! inline, aggregate and operation failures surface as notifications.
//! Nothing escapes to a process-wide error channel.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::FormsConfig;
pub use application::session::{FormSession, FormState};
pub use application::{SignInUseCase, SignUpUseCase};
pub use domain::gateway::AccountGateway;
pub use error::{AccountError, AccountResult};
pub use infra::simulated::SimulatedGateway;
pub use presentation::notify::{Notification, Notifier, Severity, TracingNotifier};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
