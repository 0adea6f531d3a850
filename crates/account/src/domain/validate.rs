//! Schema Validator
//!
//! Pure evaluation of a schema rule table over a field-value mapping.
//! No side effects; the result is a function of exactly the two inputs.

use std::collections::BTreeMap;

use kernel::field::{FieldMap, FieldValue};
use serde::Serialize;

use crate::domain::schema::{CrossCheck, CrossRule, FieldKind, Schema};

/// Violations recorded per field
///
/// At most one message per field: the first failing rule in declaration
/// order wins. Fields without a failure are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Violations(BTreeMap<&'static str, &'static str>);

impl Violations {
    /// Record a violation unless the field already has one
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    /// The recorded message for a field, if any
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// Remove a field's violation; returns whether one was recorded
    pub fn clear(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate violations in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.0.iter().map(|(&field, &message)| (field, message))
    }
}

/// Field values after a successful validation pass
///
/// Every value is coerced to its declared type: absent flags are present
/// here as `false`, while optional text absent from the input stays absent.
/// Text is carried exactly as entered - no trimming, no case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized(BTreeMap<&'static str, FieldValue>);

impl Normalized {
    fn insert(&mut self, field: &'static str, value: FieldValue) {
        self.0.insert(field, value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Text content of a field; `""` when absent
    pub fn text(&self, field: &str) -> &str {
        self.get(field).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Text content of an optional field
    pub fn opt_text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Flag state of a field; `false` when absent
    pub fn flag(&self, field: &str) -> bool {
        self.get(field).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validate a field mapping against a schema
///
/// Per field in declaration order: rules run in declaration order and stop
/// at the first failure. Absent values are evaluated as their type's
/// default (`""` / `false`), so an absent required field fails its first
/// applicable rule. Cross rules run last and only when every field they
/// read is clean; their violation lands on the dependent field.
pub fn validate(schema: &Schema, values: &FieldMap) -> Result<Normalized, Violations> {
    let mut violations = Violations::default();
    let mut normalized = Normalized::default();

    for field in schema.fields {
        let present = values.get(field.name);
        let coerced = coerce(field.kind, present);
        if let Some(rule) = field.rules.iter().find(|rule| !rule.check.passes(&coerced)) {
            violations.insert(field.name, rule.message);
            continue;
        }
        match field.kind {
            // optional text never entered stays absent in the output
            FieldKind::Text if present.is_none() => {}
            _ => normalized.insert(field.name, coerced),
        }
    }

    for rule in schema.cross {
        if rule.depends_on().iter().any(|&dep| violations.contains(dep)) {
            continue;
        }
        if !cross_passes(rule, values) {
            violations.insert(rule.field, rule.message);
        }
    }

    if violations.is_empty() {
        Ok(normalized)
    } else {
        Err(violations)
    }
}

/// Coerce a raw value to the field's declared type
fn coerce(kind: FieldKind, value: Option<&FieldValue>) -> FieldValue {
    match kind {
        FieldKind::Text => FieldValue::Text(
            value
                .and_then(FieldValue::as_text)
                .unwrap_or_default()
                .to_string(),
        ),
        FieldKind::Flag => FieldValue::Flag(value.and_then(FieldValue::as_flag).unwrap_or(false)),
    }
}

fn cross_passes(rule: &CrossRule, values: &FieldMap) -> bool {
    match rule.check {
        CrossCheck::Equals(other) => text_of(values, rule.field) == text_of(values, other),
    }
}

fn text_of<'a>(values: &'a FieldMap, field: &str) -> &'a str {
    values.get(field).and_then(FieldValue::as_text).unwrap_or("")
}
