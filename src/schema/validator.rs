//! Definition and record validation.
//!
//! This module contains the two validation layers of the registry:
//! - `SchemaValidator` checks that a schema definition is structurally
//!   sound before it is registered
//! - `RecordValidator` interprets a definition's constraint list against a
//!   raw field mapping and constructs validated records

use std::collections::HashMap;

use log::debug;
use once_cell::sync::OnceCell;
use regex::Regex;
use serde_json::Value;

use super::types::{
    ConstraintFailure, FieldConstraint, FieldDefinition, FieldType, FieldValue, FieldViolation,
    Schema, SchemaError, ValidatedRecord, ValidationError,
};

/// Syntactic email shape: one '@' separating non-empty local and domain
/// parts, with at least one dot in the domain. Deliverability and domain
/// existence are out of scope.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL_REGEX: OnceCell<Regex> = OnceCell::new();

fn email_regex() -> Result<&'static Regex, SchemaError> {
    EMAIL_REGEX.get_or_try_init(|| {
        Regex::new(EMAIL_PATTERN).map_err(|e| {
            SchemaError::InvalidData(format!("Email pattern compilation failed: {}", e))
        })
    })
}

/// Validates a [`Schema`] definition before it enters the registry.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Validates the structure of a schema definition.
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidDefinition` if:
    /// - The schema name or collection identifier is empty
    /// - The schema has no fields, or a field name is empty
    /// - A required field declares a default
    /// - A default value does not match its field's type
    /// - A constraint is attached to a field of an incompatible type
    /// - A range or length bound is inverted
    pub fn validate(schema: &Schema) -> Result<(), SchemaError> {
        if schema.name.is_empty() {
            return Err(SchemaError::InvalidDefinition(
                "Schema name cannot be empty".to_string(),
            ));
        }

        if let Some(collection) = &schema.collection {
            if collection.is_empty() {
                return Err(SchemaError::InvalidDefinition(format!(
                    "Schema '{}' has an empty collection identifier",
                    schema.name
                )));
            }
        }

        if schema.fields.is_empty() {
            return Err(SchemaError::InvalidDefinition(format!(
                "Schema '{}' must have at least one field",
                schema.name
            )));
        }

        for (field_name, field) in &schema.fields {
            if field_name.is_empty() {
                return Err(SchemaError::InvalidDefinition(
                    "Field name cannot be empty".to_string(),
                ));
            }

            Self::validate_field(&schema.name, field_name, field)?;
        }

        Ok(())
    }

    fn validate_field(
        schema_name: &str,
        field_name: &str,
        field: &FieldDefinition,
    ) -> Result<(), SchemaError> {
        if let Some(default) = &field.default {
            if field.required {
                return Err(SchemaError::InvalidDefinition(format!(
                    "Field {}.{} is required and cannot declare a default",
                    schema_name, field_name
                )));
            }
            if !default.matches(field.field_type) {
                return Err(SchemaError::InvalidDefinition(format!(
                    "Field {}.{} default does not match its {} type",
                    schema_name, field_name, field.field_type
                )));
            }
        }

        let mut min_length = None;
        let mut max_length = None;

        for constraint in &field.constraints {
            match constraint {
                FieldConstraint::MinLength { min } => {
                    Self::require_type(schema_name, field_name, field, FieldType::Text)?;
                    min_length = Some(*min);
                }
                FieldConstraint::MaxLength { max } => {
                    Self::require_type(schema_name, field_name, field, FieldType::Text)?;
                    max_length = Some(*max);
                }
                FieldConstraint::Email => {
                    Self::require_type(schema_name, field_name, field, FieldType::Text)?;
                }
                FieldConstraint::Range { min, max } => {
                    Self::require_numeric(schema_name, field_name, field)?;
                    if min > max {
                        return Err(SchemaError::InvalidDefinition(format!(
                            "Field {}.{} range is inverted ({} > {})",
                            schema_name, field_name, min, max
                        )));
                    }
                }
                FieldConstraint::NonNegative => {
                    Self::require_numeric(schema_name, field_name, field)?;
                }
            }
        }

        if let (Some(min), Some(max)) = (min_length, max_length) {
            if min > max {
                return Err(SchemaError::InvalidDefinition(format!(
                    "Field {}.{} length bounds are inverted ({} > {})",
                    schema_name, field_name, min, max
                )));
            }
        }

        Ok(())
    }

    fn require_type(
        schema_name: &str,
        field_name: &str,
        field: &FieldDefinition,
        expected: FieldType,
    ) -> Result<(), SchemaError> {
        if field.field_type == expected {
            Ok(())
        } else {
            Err(SchemaError::InvalidDefinition(format!(
                "Field {}.{} has a {}-only constraint but is declared {}",
                schema_name, field_name, expected, field.field_type
            )))
        }
    }

    fn require_numeric(
        schema_name: &str,
        field_name: &str,
        field: &FieldDefinition,
    ) -> Result<(), SchemaError> {
        match field.field_type {
            FieldType::Integer | FieldType::Float => Ok(()),
            other => Err(SchemaError::InvalidDefinition(format!(
                "Field {}.{} has a numeric constraint but is declared {}",
                schema_name, field_name, other
            ))),
        }
    }
}

/// Validates raw field data against a schema and constructs the record.
///
/// Validation is a pure function of its input: it holds no state beyond the
/// borrowed schema, performs no I/O, and collects every failing field
/// before reporting, rather than stopping at the first.
pub struct RecordValidator<'a> {
    schema: &'a Schema,
}

impl<'a> RecordValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates the raw field mapping and constructs a [`ValidatedRecord`].
    ///
    /// Unknown keys in the input are ignored. A field that is absent or
    /// explicitly null counts as unset: a declared default is applied, a
    /// required field is reported missing, and an optional field stays
    /// absent from the record.
    ///
    /// # Errors
    /// Returns `SchemaError::Validation` carrying one violation per failed
    /// (field, constraint) pair when any field fails. No record is
    /// constructed in that case.
    pub fn validate(
        &self,
        raw_fields: &HashMap<String, Value>,
    ) -> Result<ValidatedRecord, SchemaError> {
        let mut values = HashMap::new();
        let mut violations = Vec::new();

        for (field_name, field) in &self.schema.fields {
            let raw = match raw_fields.get(field_name) {
                None | Some(Value::Null) => {
                    if let Some(default) = &field.default {
                        values.insert(field_name.clone(), default.clone());
                    } else if field.required {
                        violations.push(FieldViolation {
                            field: field_name.clone(),
                            constraint: ConstraintFailure::MissingRequired,
                            value: Value::Null,
                        });
                    }
                    continue;
                }
                Some(raw) => raw,
            };

            let Some(typed) = coerce(raw, field.field_type) else {
                violations.push(FieldViolation {
                    field: field_name.clone(),
                    constraint: ConstraintFailure::TypeMismatch {
                        expected: field.field_type,
                    },
                    value: raw.clone(),
                });
                continue;
            };

            let mut accepted = true;
            for constraint in &field.constraints {
                if let Some(failure) = check_constraint(&typed, constraint)? {
                    violations.push(FieldViolation {
                        field: field_name.clone(),
                        constraint: failure,
                        value: raw.clone(),
                    });
                    accepted = false;
                }
            }

            if accepted {
                values.insert(field_name.clone(), typed);
            }
        }

        if violations.is_empty() {
            Ok(ValidatedRecord::new(
                self.schema.name.clone(),
                self.schema.collection_id(),
                values,
            ))
        } else {
            debug!(
                "Validation failed for schema '{}': {} field(s) rejected",
                self.schema.name,
                violations.len()
            );
            // Stable rendering order for callers surfacing the violations.
            violations.sort_by(|a, b| a.field.cmp(&b.field));
            Err(ValidationError::new(self.schema.name.clone(), violations).into())
        }
    }
}

/// Reads a raw JSON value as the declared field type. Integer fields accept
/// integer-valued floats; float fields accept any JSON number. No other
/// cross-type coercion is performed.
fn coerce(raw: &Value, field_type: FieldType) -> Option<FieldValue> {
    match field_type {
        FieldType::Text => raw.as_str().map(FieldValue::from),
        FieldType::Integer => match raw {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64().and_then(|f| {
                    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                        Some(f as i64)
                    } else {
                        None
                    }
                })
            }),
            _ => None,
        }
        .map(FieldValue::Integer),
        FieldType::Float => raw.as_f64().map(FieldValue::Float),
        FieldType::Boolean => raw.as_bool().map(FieldValue::Boolean),
    }
}

fn check_constraint(
    value: &FieldValue,
    constraint: &FieldConstraint,
) -> Result<Option<ConstraintFailure>, SchemaError> {
    let failure = match (constraint, value) {
        (FieldConstraint::MinLength { min }, FieldValue::Text(s)) => {
            (s.chars().count() < *min).then_some(ConstraintFailure::TooShort { min: *min })
        }
        (FieldConstraint::MaxLength { max }, FieldValue::Text(s)) => {
            (s.chars().count() > *max).then_some(ConstraintFailure::TooLong { max: *max })
        }
        (FieldConstraint::Email, FieldValue::Text(s)) => {
            (!email_regex()?.is_match(s)).then_some(ConstraintFailure::InvalidEmail)
        }
        (FieldConstraint::Range { min, max }, FieldValue::Integer(i)) => {
            (i < min || i > max).then_some(ConstraintFailure::OutOfRange {
                min: *min,
                max: *max,
            })
        }
        (FieldConstraint::Range { min, max }, FieldValue::Float(f)) => {
            (*f < *min as f64 || *f > *max as f64).then_some(ConstraintFailure::OutOfRange {
                min: *min,
                max: *max,
            })
        }
        (FieldConstraint::NonNegative, FieldValue::Integer(i)) => {
            (*i < 0).then_some(ConstraintFailure::Negative)
        }
        (FieldConstraint::NonNegative, FieldValue::Float(f)) => {
            (*f < 0.0).then_some(ConstraintFailure::Negative)
        }
        // Constraint/type mismatches are rejected at registration time.
        _ => None,
    };

    Ok(failure)
}
