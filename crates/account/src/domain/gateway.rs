//! Account Gateway Port
//!
//! Interface to the backing account service. The shipped implementation is
//! the fixed-latency simulation in the infrastructure layer; a real backend
//! client implements the same trait and slots in without touching the
//! submit state machine.

use crate::domain::sign_in::SignInRecord;
use crate::domain::sign_up::SignUpRecord;
use crate::error::AccountResult;

/// Account operations behind the submit pipeline
#[trait_variant::make(AccountGateway: Send)]
pub trait LocalAccountGateway {
    /// Authenticate an existing account
    async fn sign_in(&self, record: &SignInRecord) -> AccountResult<()>;

    /// Create a new account
    async fn sign_up(&self, record: &SignUpRecord) -> AccountResult<()>;
}
