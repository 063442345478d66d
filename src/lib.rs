//! # Formfold
//!
//! Schema registry and record validation for collection-backed storage.
//!
//! Formfold defines the structural contract of each entity an application
//! stores (its recognized fields, their types, and their validation rules)
//! and validates raw records against that contract before they are handed
//! to a storage layer. Each entity maps to a storage collection identified
//! by the lowercased entity name (overridable per schema).
//!
//! ## Core Components
//!
//! * `schema::types` - Schema, field, record, and error types
//! * `schema::core` - The schema registry and its validate-and-construct
//!   operation
//! * `schema::validator` - Definition and record validation
//! * `schema::parsing` - Loading schema definitions from JSON
//! * `schema::catalog` - The built-in application schemas
//!
//! ## Usage
//!
//! ```
//! use formfold::SchemaRegistry;
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let registry = SchemaRegistry::with_catalog().unwrap();
//!
//! let mut raw = HashMap::new();
//! raw.insert("name".to_string(), json!("Jo"));
//! raw.insert("email".to_string(), json!("jo@x.com"));
//! raw.insert("message".to_string(), json!("Hello there"));
//!
//! let record = registry.validate("Inquiry", &raw).unwrap();
//! assert_eq!(record.collection(), "inquiry");
//! ```

pub mod schema;

// Re-export main types for convenience
pub use schema::core::SchemaRegistry;
pub use schema::types::{
    ConstraintFailure, FieldConstraint, FieldDefinition, FieldType, FieldValue, FieldViolation,
    Schema, SchemaError, ValidatedRecord, ValidationError,
};
pub use schema::validator::{RecordValidator, SchemaValidator};
