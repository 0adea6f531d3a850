//! Value Object Module

pub mod email;
pub mod plan;

pub use email::Email;
pub use plan::{Plan, UnknownPlan};
