//! Domain Layer
//!
//! Schema rule tables, the pure validator, typed records, value objects,
//! and the account gateway port.

pub mod field;
pub mod gateway;
pub mod schema;
pub mod sign_in;
pub mod sign_up;
pub mod validate;
pub mod value_object;

// Re-exports
pub use gateway::AccountGateway;
pub use sign_in::{SIGN_IN, SignInRecord};
pub use sign_up::{SIGN_UP, SignUpRecord};
pub use validate::{Normalized, Violations, validate};
