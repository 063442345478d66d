use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::FieldType;

/// Owned, typed value held by a record field once validation has accepted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value for float fields. Integer values are not
    /// widened here; coercion happens during validation.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this value is compatible with the given field type. Used to
    /// check declared defaults against their field at registration time.
    pub(crate) fn matches(&self, field_type: FieldType) -> bool {
        matches!(
            (self, field_type),
            (Self::Text(_), FieldType::Text)
                | (Self::Integer(_), FieldType::Integer)
                | (Self::Float(_), FieldType::Float)
                | (Self::Boolean(_), FieldType::Boolean)
        )
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Integer(i) => Value::from(*i),
            Self::Float(f) => Value::from(*f),
            Self::Boolean(b) => Value::Bool(*b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// A record that has passed validation against its schema.
///
/// Records are immutable once constructed: every required field is present
/// and every value has satisfied its field's constraints. Optional fields
/// that were unset are simply absent; [`ValidatedRecord::get`] returns
/// `None` for them rather than any sentinel value. The only way to obtain
/// one is through schema validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedRecord {
    schema_name: String,
    collection: String,
    values: HashMap<String, FieldValue>,
}

impl ValidatedRecord {
    pub(crate) fn new(
        schema_name: String,
        collection: String,
        values: HashMap<String, FieldValue>,
    ) -> Self {
        Self {
            schema_name,
            collection,
            values,
        }
    }

    /// Name of the schema this record was validated against.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Storage identifier the record belongs to.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// The full validated field set, for handoff to the storage layer.
    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.values
    }

    /// Converts the record back into the raw field mapping shape accepted by
    /// validation. Re-validating the result yields an equal record.
    pub fn to_raw(&self) -> HashMap<String, Value> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_accessors() {
        assert_eq!(FieldValue::Text("hi".to_string()).as_text(), Some("hi"));
        assert_eq!(FieldValue::Integer(7).as_integer(), Some(7));
        assert_eq!(FieldValue::Float(1.5).as_float(), Some(1.5));
        assert_eq!(FieldValue::Boolean(true).as_boolean(), Some(true));
        assert_eq!(FieldValue::Integer(7).as_text(), None);
    }

    #[test]
    fn test_field_value_type_match() {
        assert!(FieldValue::Text("x".to_string()).matches(FieldType::Text));
        assert!(!FieldValue::Text("x".to_string()).matches(FieldType::Integer));
        assert!(FieldValue::Boolean(false).matches(FieldType::Boolean));
    }

    #[test]
    fn test_record_absent_field_is_none() {
        let mut values = HashMap::new();
        values.insert("name".to_string(), FieldValue::from("Jo"));
        let record =
            ValidatedRecord::new("Inquiry".to_string(), "inquiry".to_string(), values);

        assert!(record.contains("name"));
        assert!(record.get("phone").is_none());
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_to_raw_preserves_values() {
        let mut values = HashMap::new();
        values.insert("age".to_string(), FieldValue::Integer(30));
        values.insert("is_active".to_string(), FieldValue::Boolean(true));
        let record = ValidatedRecord::new("User".to_string(), "user".to_string(), values);

        let raw = record.to_raw();
        assert_eq!(raw.get("age"), Some(&serde_json::json!(30)));
        assert_eq!(raw.get("is_active"), Some(&serde_json::json!(true)));
    }
}
