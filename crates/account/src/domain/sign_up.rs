//! Sign-Up Form
//!
//! Rule table and normalized record for the sign-up page. The password
//! confirmation is the one cross-field rule in the system: it compares
//! against `password` but reports on `confirmPassword`.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

use crate::domain::field;
use crate::domain::schema::{Check, CrossCheck, CrossRule, FieldKind, FieldSchema, Rule, Schema};
use crate::domain::validate::Normalized;
use crate::domain::value_object::email::{EMAIL_MAX_CHARS, Email};
use crate::domain::value_object::plan::{PLAN_CODES, Plan};

/// Sign-up schema
pub static SIGN_UP: Schema = Schema {
    name: "sign_up",
    fields: &[
        FieldSchema {
            name: field::FULL_NAME,
            kind: FieldKind::Text,
            default: None,
            rules: &[
                Rule {
                    check: Check::MinChars(2),
                    message: "Name must be at least 2 characters",
                },
                Rule {
                    check: Check::MaxChars(100),
                    message: "Name must be at most 100 characters",
                },
            ],
        },
        FieldSchema {
            name: field::EMAIL,
            kind: FieldKind::Text,
            default: None,
            rules: &[
                Rule {
                    check: Check::Email,
                    message: "Invalid email address",
                },
                Rule {
                    check: Check::MaxChars(EMAIL_MAX_CHARS),
                    message: "Email must be at most 255 characters",
                },
            ],
        },
        FieldSchema {
            name: field::PASSWORD,
            kind: FieldKind::Text,
            default: None,
            rules: &[
                Rule {
                    check: Check::MinChars(8),
                    message: "Password must be at least 8 characters",
                },
                Rule {
                    check: Check::MaxChars(100),
                    message: "Password must be at most 100 characters",
                },
            ],
        },
        FieldSchema {
            name: field::CONFIRM_PASSWORD,
            kind: FieldKind::Text,
            default: None,
            rules: &[],
        },
        FieldSchema {
            name: field::COMPANY_NAME,
            kind: FieldKind::Text,
            default: None,
            rules: &[Rule {
                check: Check::MaxChars(100),
                message: "Company name must be at most 100 characters",
            }],
        },
        FieldSchema {
            name: field::PLAN,
            kind: FieldKind::Text,
            default: Some("free"),
            rules: &[Rule {
                check: Check::OneOf(PLAN_CODES),
                message: "Select a valid plan",
            }],
        },
        FieldSchema {
            name: field::TERMS,
            kind: FieldKind::Flag,
            default: None,
            rules: &[Rule {
                check: Check::Accepted,
                message: "You must accept the terms",
            }],
        },
    ],
    cross: &[CrossRule {
        field: field::CONFIRM_PASSWORD,
        check: CrossCheck::Equals(field::PASSWORD),
        message: "Passwords don't match",
    }],
};

/// Normalized sign-up submission
#[derive(Clone, PartialEq)]
pub struct SignUpRecord {
    pub full_name: String,
    pub email: Email,
    pub password: String,
    /// Pass-through: carried to the gateway, no behavior attached
    pub company_name: Option<String>,
    pub plan: Plan,
    pub terms: bool,
}

impl SignUpRecord {
    /// Build from a field map that passed [`SIGN_UP`] validation
    pub(crate) fn from_normalized(fields: &Normalized) -> AppResult<Self> {
        let plan = fields
            .text(field::PLAN)
            .parse::<Plan>()
            .map_err(|e| AppError::internal(e.to_string()))?;

        Ok(Self {
            full_name: fields.text(field::FULL_NAME).to_string(),
            email: Email::new(fields.text(field::EMAIL))?,
            password: fields.text(field::PASSWORD).to_string(),
            company_name: fields.opt_text(field::COMPANY_NAME).map(str::to_string),
            plan,
            terms: fields.flag(field::TERMS),
        })
    }
}

impl fmt::Debug for SignUpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRecord")
            .field("full_name", &self.full_name)
            .field("email", &self.email.as_str())
            .field("password", &"[REDACTED]")
            .field("company_name", &self.company_name)
            .field("plan", &self.plan)
            .field("terms", &self.terms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate::validate;
    use kernel::field::FieldMap;

    fn valid_values() -> FieldMap {
        let mut values = SIGN_UP.seed_values();
        values.insert(field::FULL_NAME, "John Doe");
        values.insert(field::EMAIL, "john@company.com");
        values.insert(field::PASSWORD, "a-long-password");
        values.insert(field::CONFIRM_PASSWORD, "a-long-password");
        values.insert(field::TERMS, true);
        values
    }

    #[test]
    fn test_seed_values() {
        let values = SIGN_UP.seed_values();
        assert_eq!(
            values.get(field::PLAN).and_then(|v| v.as_text()),
            Some("free")
        );
        assert_eq!(
            values.get(field::TERMS).and_then(|v| v.as_flag()),
            Some(false)
        );
        assert!(values.get(field::EMAIL).is_none());
    }

    #[test]
    fn test_valid_sign_up_record() {
        let mut values = valid_values();
        values.insert(field::COMPANY_NAME, "Acme Warehousing");
        let normalized = validate(&SIGN_UP, &values).unwrap();
        // every declared field present and typed
        assert_eq!(normalized.len(), 7);

        let record = SignUpRecord::from_normalized(&normalized).unwrap();
        assert_eq!(record.full_name, "John Doe");
        assert_eq!(record.email.as_str(), "john@company.com");
        assert_eq!(record.password, "a-long-password");
        assert_eq!(record.company_name.as_deref(), Some("Acme Warehousing"));
        assert_eq!(record.plan, Plan::Free);
        assert!(record.terms);
    }

    #[test]
    fn test_short_password_reported_even_when_confirmation_matches() {
        let mut values = valid_values();
        values.insert(field::FULL_NAME, "Jo");
        values.insert(field::PASSWORD, "short");
        values.insert(field::CONFIRM_PASSWORD, "short");
        let violations = validate(&SIGN_UP, &values).unwrap_err();
        assert_eq!(
            violations.get(field::PASSWORD),
            Some("Password must be at least 8 characters")
        );
        assert!(violations.get(field::CONFIRM_PASSWORD).is_none());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_unaccepted_terms() {
        let mut values = valid_values();
        values.insert(field::TERMS, false);
        let violations = validate(&SIGN_UP, &values).unwrap_err();
        assert_eq!(violations.get(field::TERMS), Some("You must accept the terms"));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_mismatched_confirmation_reports_dependent_field_only() {
        let mut values = valid_values();
        values.insert(field::CONFIRM_PASSWORD, "a-different-password");
        let violations = validate(&SIGN_UP, &values).unwrap_err();
        assert_eq!(
            violations.get(field::CONFIRM_PASSWORD),
            Some("Passwords don't match")
        );
        assert!(violations.get(field::PASSWORD).is_none());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_absent_email_fails_syntax_rule() {
        let mut values = valid_values();
        values.remove(field::EMAIL);
        let violations = validate(&SIGN_UP, &values).unwrap_err();
        assert_eq!(violations.get(field::EMAIL), Some("Invalid email address"));
    }

    #[test]
    fn test_company_name_is_optional() {
        let normalized = validate(&SIGN_UP, &valid_values()).unwrap();
        assert!(normalized.opt_text(field::COMPANY_NAME).is_none());
        let record = SignUpRecord::from_normalized(&normalized).unwrap();
        assert!(record.company_name.is_none());
    }

    #[test]
    fn test_unknown_plan_code() {
        let mut values = valid_values();
        values.insert(field::PLAN, "platinum");
        let violations = validate(&SIGN_UP, &values).unwrap_err();
        assert_eq!(violations.get(field::PLAN), Some("Select a valid plan"));
    }

    #[test]
    fn test_overlong_name() {
        let mut values = valid_values();
        values.insert(field::FULL_NAME, "x".repeat(101));
        let violations = validate(&SIGN_UP, &values).unwrap_err();
        assert_eq!(
            violations.get(field::FULL_NAME),
            Some("Name must be at most 100 characters")
        );
    }

    #[test]
    fn test_record_debug_redacts_password() {
        let normalized = validate(&SIGN_UP, &valid_values()).unwrap();
        let record = SignUpRecord::from_normalized(&normalized).unwrap();
        let debug = format!("{:?}", record);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("a-long-password"));
    }
}
