pub mod errors;
pub mod field;
pub mod record;
pub mod schema;

pub use errors::{ConstraintFailure, FieldViolation, SchemaError, ValidationError};
pub use field::{FieldConstraint, FieldDefinition, FieldType};
pub use record::{FieldValue, ValidatedRecord};
pub use schema::Schema;
