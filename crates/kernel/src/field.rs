//! Field Vocabulary
//!
//! The primitives the account forms exchange with their UI: a field value
//! is either text or a flag, and a form's working state is a partially
//! populated mapping from field name to value. Fields are absent until the
//! user first edits them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single form field value
///
/// Serialized untagged, so a JSON form payload maps 1:1:
/// `{"email": "jo@company.com", "rememberMe": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text from an input control
    Text(String),
    /// Boolean from a checkbox control
    Flag(bool),
}

impl FieldValue {
    /// The text content, if this is a text value
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    /// The flag state, if this is a flag value
    #[inline]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

/// Form field values keyed by wire name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap(BTreeMap<String, FieldValue>);

impl FieldMap {
    /// Create an empty field map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value, replacing any previous one
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Get a field's value
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Remove a field's value
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.0.remove(field)
    }

    /// Whether the field has been populated
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::from("hello").as_text(), Some("hello"));
        assert_eq!(FieldValue::from(true).as_text(), None);
    }

    #[test]
    fn test_as_flag() {
        assert_eq!(FieldValue::from(true).as_flag(), Some(true));
        assert_eq!(FieldValue::from(false).as_flag(), Some(false));
        assert_eq!(FieldValue::from("true").as_flag(), None);
    }

    #[test]
    fn test_map_insert_and_get() {
        let mut map = FieldMap::new();
        assert!(map.is_empty());
        assert!(!map.contains("email"));

        map.insert("email", "jo@company.com");
        map.insert("rememberMe", true);

        assert_eq!(map.len(), 2);
        assert!(map.contains("email"));
        assert_eq!(
            map.get("email").and_then(FieldValue::as_text),
            Some("jo@company.com")
        );
        assert_eq!(
            map.get("rememberMe").and_then(FieldValue::as_flag),
            Some(true)
        );
        assert!(map.get("password").is_none());
    }

    #[test]
    fn test_map_insert_replaces() {
        let mut map = FieldMap::new();
        map.insert("email", "first@example.com");
        map.insert("email", "second@example.com");
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("email").and_then(FieldValue::as_text),
            Some("second@example.com")
        );
    }

    #[test]
    fn test_serde_untagged_payload() {
        let json = r#"{"email":"jo@company.com","rememberMe":true}"#;
        let map: FieldMap = serde_json::from_str(json).unwrap();
        assert_eq!(
            map.get("email"),
            Some(&FieldValue::Text("jo@company.com".to_string()))
        );
        assert_eq!(map.get("rememberMe"), Some(&FieldValue::Flag(true)));

        let back = serde_json::to_string(&map).unwrap();
        assert_eq!(back, json);
    }
}
