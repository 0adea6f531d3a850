//! Schema Rule Tables
//!
//! Declarative validation rules over a field-value mapping. A schema is a
//! plain static table: each field declares an ordered rule list, and the
//! table may add cross-field rules evaluated after the per-field pass.
//! The generic evaluator lives in [`crate::domain::validate`].

use kernel::field::{FieldMap, FieldValue};

use crate::domain::value_object::email::Email;

/// Declared type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; absent values coerce to `""` for rule evaluation
    Text,
    /// Boolean; absent values coerce to `false`
    Flag,
}

/// One field of a form schema
#[derive(Debug)]
pub struct FieldSchema {
    /// Wire name of the field
    pub name: &'static str,
    pub kind: FieldKind,
    /// Value seeded into a fresh form session
    pub default: Option<&'static str>,
    /// Rules in evaluation order; the first failure is the field's violation
    pub rules: &'static [Rule],
}

/// A single validation rule: a predicate plus its user-facing message
#[derive(Debug)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

/// Rule predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Text must not be empty
    NonEmpty,
    /// Text must be a structurally valid email address
    Email,
    /// Minimum length in characters
    MinChars(usize),
    /// Maximum length in characters
    MaxChars(usize),
    /// Text must be one of the listed codes
    OneOf(&'static [&'static str]),
    /// Flag must be set
    Accepted,
}

impl Check {
    /// Evaluate the predicate against a type-coerced value
    pub fn passes(&self, value: &FieldValue) -> bool {
        match self {
            Check::NonEmpty => value.as_text().is_some_and(|text| !text.is_empty()),
            Check::Email => value.as_text().is_some_and(Email::is_valid_format),
            Check::MinChars(min) => value
                .as_text()
                .is_some_and(|text| text.chars().count() >= *min),
            Check::MaxChars(max) => value
                .as_text()
                .is_some_and(|text| text.chars().count() <= *max),
            Check::OneOf(codes) => value.as_text().is_some_and(|text| codes.contains(&text)),
            Check::Accepted => value.as_flag() == Some(true),
        }
    }
}

/// A rule reading more than one field
///
/// Cross rules run after the per-field pass and only when none of the
/// fields they read carries a violation. Their violation is reported
/// against `field`, the dependent side.
#[derive(Debug)]
pub struct CrossRule {
    /// Field the violation is reported against
    pub field: &'static str,
    pub check: CrossCheck,
    pub message: &'static str,
}

/// Cross-rule predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossCheck {
    /// Value must equal the named field's value
    Equals(&'static str),
}

impl CrossRule {
    /// Fields this rule reads
    pub fn depends_on(&self) -> [&'static str; 2] {
        match self.check {
            CrossCheck::Equals(other) => [self.field, other],
        }
    }
}

/// A form's complete rule table
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    /// Fields in declaration (= evaluation) order
    pub fields: &'static [FieldSchema],
    pub cross: &'static [CrossRule],
}

impl Schema {
    /// Initial values for a fresh session: flags start unset, text fields
    /// with a declared default start at it.
    pub fn seed_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        for field in self.fields {
            match (field.kind, field.default) {
                (FieldKind::Flag, _) => values.insert(field.name, false),
                (FieldKind::Text, Some(default)) => values.insert(field.name, default),
                (FieldKind::Text, None) => {}
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(Check::NonEmpty.passes(&FieldValue::from("x")));
        assert!(!Check::NonEmpty.passes(&FieldValue::from("")));
        assert!(!Check::NonEmpty.passes(&FieldValue::from(true)));
    }

    #[test]
    fn test_char_bounds_count_characters_not_bytes() {
        // 2 characters, 6 bytes
        let value = FieldValue::from("日本");
        assert!(Check::MinChars(2).passes(&value));
        assert!(Check::MaxChars(2).passes(&value));
        assert!(!Check::MinChars(3).passes(&value));
        assert!(!Check::MaxChars(1).passes(&value));
    }

    #[test]
    fn test_one_of() {
        let codes: &[&str] = &["free", "pro"];
        assert!(Check::OneOf(codes).passes(&FieldValue::from("free")));
        assert!(!Check::OneOf(codes).passes(&FieldValue::from("basic")));
        assert!(!Check::OneOf(codes).passes(&FieldValue::from("")));
    }

    #[test]
    fn test_accepted() {
        assert!(Check::Accepted.passes(&FieldValue::from(true)));
        assert!(!Check::Accepted.passes(&FieldValue::from(false)));
        assert!(!Check::Accepted.passes(&FieldValue::from("true")));
    }

    #[test]
    fn test_cross_rule_dependencies() {
        let rule = CrossRule {
            field: "confirmPassword",
            check: CrossCheck::Equals("password"),
            message: "Passwords don't match",
        };
        assert_eq!(rule.depends_on(), ["confirmPassword", "password"]);
    }
}
