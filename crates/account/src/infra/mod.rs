//! Infrastructure Layer
//!
//! Gateway implementations.

pub mod simulated;

pub use simulated::SimulatedGateway;
