use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::field::FieldType;

/// Names the check a field failed during record validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintFailure {
    /// A required field was absent (or explicitly null) in the raw input.
    MissingRequired,
    /// The raw value could not be read as the field's declared type.
    TypeMismatch { expected: FieldType },
    /// Numeric value outside the field's inclusive range.
    OutOfRange { min: i64, max: i64 },
    /// Numeric value below zero on a non-negative field.
    Negative,
    /// Text shorter than the field's inclusive minimum length.
    TooShort { min: usize },
    /// Text longer than the field's inclusive maximum length.
    TooLong { max: usize },
    /// Text is not a syntactically valid email address.
    InvalidEmail,
}

impl fmt::Display for ConstraintFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "required field is missing"),
            Self::TypeMismatch { expected } => write!(f, "expected a {} value", expected),
            Self::OutOfRange { min, max } => {
                write!(f, "value must be between {} and {}", min, max)
            }
            Self::Negative => write!(f, "value must not be negative"),
            Self::TooShort { min } => write!(f, "must be at least {} characters", min),
            Self::TooLong { max } => write!(f, "must be at most {} characters", max),
            Self::InvalidEmail => write!(f, "not a valid email address"),
        }
    }
}

/// One field that failed validation: which field, which check, and the
/// offending raw value. Surfaced to callers so failures can be rendered
/// back as form-correction guidance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: ConstraintFailure,
    pub value: Value,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// Validation outcome carrying every field that failed, not just the first.
///
/// The violation list is never empty: a record with no violations is
/// returned as a [`ValidatedRecord`](super::record::ValidatedRecord)
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub schema: String,
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    #[must_use]
    pub fn new(schema: String, violations: Vec<FieldViolation>) -> Self {
        Self { schema, violations }
    }

    /// Whether any violation names the given field.
    pub fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "validation failed for schema '{}' ({} field(s) rejected)",
            self.schema,
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Unified error type for schema registration, loading, and validation.
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("Schema not found: {0}")]
    NotFound(String),

    #[error("Schema '{0}' is already registered")]
    DuplicateSchema(String),

    #[error("Collection '{collection}' is already claimed by schema '{existing}'")]
    DuplicateCollection { collection: String, existing: String },

    #[error("Invalid schema definition: {0}")]
    InvalidDefinition(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SchemaError {
    /// Returns the carried [`ValidationError`] when this is a validation
    /// failure.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}
