//! Sign-In Form
//!
//! Rule table and normalized record for the sign-in page.

use std::fmt;

use kernel::error::app_error::AppResult;

use crate::domain::field;
use crate::domain::schema::{Check, FieldKind, FieldSchema, Rule, Schema};
use crate::domain::validate::Normalized;
use crate::domain::value_object::email::{EMAIL_MAX_CHARS, Email};

/// Sign-in schema: email + password, plus an opaque remember-me flag
pub static SIGN_IN: Schema = Schema {
    name: "sign_in",
    fields: &[
        FieldSchema {
            name: field::EMAIL,
            kind: FieldKind::Text,
            default: None,
            rules: &[
                Rule {
                    check: Check::NonEmpty,
                    message: "Email is required",
                },
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
            rules: &[Rule {
                check: Check::NonEmpty,
                message: "Password is required",
            }],
        },
        FieldSchema {
            name: field::REMEMBER_ME,
            kind: FieldKind::Flag,
            default: None,
            rules: &[],
        },
    ],
    cross: &[],
};

/// Normalized sign-in submission
#[derive(Clone, PartialEq)]
pub struct SignInRecord {
    pub email: Email,
    pub password: String,
    /// Pass-through: carried to the gateway, no behavior attached
    pub remember_me: bool,
}

impl SignInRecord {
    /// Build from a field map that passed [`SIGN_IN`] validation
    pub(crate) fn from_normalized(fields: &Normalized) -> AppResult<Self> {
        Ok(Self {
            email: Email::new(fields.text(field::EMAIL))?,
            password: fields.text(field::PASSWORD).to_string(),
            remember_me: fields.flag(field::REMEMBER_ME),
        })
    }
}

impl fmt::Debug for SignInRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRecord")
            .field("email", &self.email.as_str())
            .field("password", &"[REDACTED]")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate::validate;
    use kernel::field::FieldMap;

    fn valid_values() -> FieldMap {
        let mut values = FieldMap::new();
        values.insert(field::EMAIL, "john@company.com");
        values.insert(field::PASSWORD, "hunter2");
        values
    }

    #[test]
    fn test_valid_sign_in() {
        let normalized = validate(&SIGN_IN, &valid_values()).unwrap();
        assert_eq!(normalized.text(field::EMAIL), "john@company.com");
        assert_eq!(normalized.text(field::PASSWORD), "hunter2");
        assert!(!normalized.flag(field::REMEMBER_ME));
        assert_eq!(normalized.len(), 3);
    }

    #[test]
    fn test_invalid_email_reports_email_only() {
        let mut values = valid_values();
        values.insert(field::EMAIL, "not-an-email");
        values.insert(field::PASSWORD, "x");
        let violations = validate(&SIGN_IN, &values).unwrap_err();
        assert_eq!(violations.get(field::EMAIL), Some("Invalid email address"));
        assert!(violations.get(field::PASSWORD).is_none());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_absent_email_is_required() {
        let mut values = FieldMap::new();
        values.insert(field::PASSWORD, "hunter2");
        let violations = validate(&SIGN_IN, &values).unwrap_err();
        assert_eq!(violations.get(field::EMAIL), Some("Email is required"));
    }

    #[test]
    fn test_overlong_email() {
        let mut values = valid_values();
        values.insert(field::EMAIL, format!("a@{}.com", "b".repeat(260)));
        let violations = validate(&SIGN_IN, &values).unwrap_err();
        assert_eq!(
            violations.get(field::EMAIL),
            Some("Email must be at most 255 characters")
        );
    }

    #[test]
    fn test_empty_password() {
        let mut values = valid_values();
        values.insert(field::PASSWORD, "");
        let violations = validate(&SIGN_IN, &values).unwrap_err();
        assert_eq!(violations.get(field::PASSWORD), Some("Password is required"));
    }

    #[test]
    fn test_remember_me_passes_through() {
        let mut values = valid_values();
        values.insert(field::REMEMBER_ME, true);
        let normalized = validate(&SIGN_IN, &values).unwrap();
        let record = SignInRecord::from_normalized(&normalized).unwrap();
        assert!(record.remember_me);
        assert_eq!(record.email.as_str(), "john@company.com");
    }

    #[test]
    fn test_record_debug_redacts_password() {
        let normalized = validate(&SIGN_IN, &valid_values()).unwrap();
        let record = SignInRecord::from_normalized(&normalized).unwrap();
        let debug = format!("{:?}", record);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("hunter2"));
    }
}
