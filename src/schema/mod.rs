pub mod catalog;
pub mod core;
pub mod parsing;
pub mod types;
pub mod validator;

pub use self::core::SchemaRegistry;
pub use types::{Schema, SchemaError};
pub use validator::{RecordValidator, SchemaValidator};
