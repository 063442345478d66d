use serde::{Deserialize, Serialize};

use super::record::FieldValue;

/// Primitive type a field's values must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// A single validation rule attached to a field definition.
///
/// Rules are plain data interpreted by the record validator; string length
/// bounds and numeric ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FieldConstraint {
    /// Minimum number of characters for a text field.
    MinLength { min: usize },
    /// Maximum number of characters for a text field.
    MaxLength { max: usize },
    /// Inclusive numeric range for an integer field.
    Range { min: i64, max: i64 },
    /// Numeric field must be zero or greater.
    NonNegative,
    /// Text field must look like an email address. Syntax only, no
    /// deliverability or domain-existence check.
    Email,
}

/// Declares one field of a schema: its type, whether it must be present,
/// the constraints its values must satisfy, and an optional default applied
/// when the field is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub field_type: FieldType,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub constraints: Vec<FieldConstraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldValue>,
}

fn default_required() -> bool {
    true
}

impl FieldDefinition {
    /// Creates a required field of the given type.
    #[must_use]
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            constraints: Vec::new(),
            default: None,
        }
    }

    /// Creates an optional field of the given type.
    #[must_use]
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            constraints: Vec::new(),
            default: None,
        }
    }

    #[must_use]
    pub fn with_constraint(mut self, constraint: FieldConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Sets the value applied when the field is unset. A field carrying a
    /// default must be declared optional; the definition validator rejects
    /// required fields with defaults.
    #[must_use]
    pub fn with_default(mut self, default: FieldValue) -> Self {
        self.default = Some(default);
        self
    }
}
