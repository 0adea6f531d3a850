//! Form Session
//!
//! Per-page form state: current values, recorded violations, and the submit
//! lifecycle. The UI layer owns exactly one session per rendered form and
//! mutates it only through these transitions; it is never shared between
//! pages and never resets itself.

use derive_more::Display;
use kernel::error::app_error::AppError;
use kernel::field::{FieldMap, FieldValue};

use crate::domain::schema::Schema;
use crate::domain::sign_in::SIGN_IN;
use crate::domain::sign_up::SIGN_UP;
use crate::domain::validate::Violations;

/// Submit lifecycle state
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Form session state machine
#[derive(Debug)]
pub struct FormSession {
    schema: &'static Schema,
    values: FieldMap,
    violations: Violations,
    operation_error: Option<AppError>,
    state: FormState,
}

impl FormSession {
    /// Create an idle session seeded with the schema's defaults
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: schema.seed_values(),
            violations: Violations::default(),
            operation_error: None,
            state: FormState::Idle,
        }
    }

    /// Session for the sign-in page
    pub fn sign_in() -> Self {
        Self::new(&SIGN_IN)
    }

    /// Session for the sign-up page
    pub fn sign_up() -> Self {
        Self::new(&SIGN_UP)
    }

    // ========================================================================
    // Accessors (the surface UI collaborators bind to)
    // ========================================================================

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn values(&self) -> &FieldMap {
        &self.values
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// True from submit request to operation resolution. Sole signal for
    /// disabling the submit control and swapping its caption.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting)
    }

    /// The recorded violation for a field, if any
    pub fn violation(&self, field: &str) -> Option<&'static str> {
        self.violations.get(field)
    }

    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// The stored non-field error from a failed account operation
    pub fn operation_error(&self) -> Option<&AppError> {
        self.operation_error.as_ref()
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Record a field edit and clear any stored violation for that field.
    /// Ignored while a submit is in flight.
    pub fn edit(&mut self, field: &str, value: impl Into<FieldValue>) {
        if self.is_submitting() {
            tracing::debug!(field, "edit ignored while submitting");
            return;
        }
        self.values.insert(field, value.into());
        self.violations.clear(field);
    }

    /// Request a submit. Returns `false` (and changes nothing) when one is
    /// already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.violations = Violations::default();
        self.operation_error = None;
        self.state = FormState::Submitting;
        true
    }

    /// Validation failed: record the violation mapping
    pub fn fail_validation(&mut self, violations: Violations) {
        self.violations = violations;
        self.state = FormState::Failed;
    }

    /// The account operation was rejected after validation passed.
    /// Entered values are preserved so the user can edit and resubmit.
    pub fn fail_operation(&mut self, error: AppError) {
        self.operation_error = Some(error);
        self.state = FormState::Failed;
    }

    /// The account operation resolved
    pub fn succeed(&mut self) {
        self.state = FormState::Succeeded;
    }
}
