//! Common test utilities and fixtures shared by the integration tests.

use std::collections::HashMap;

use formfold::{SchemaError, SchemaRegistry};
use serde_json::Value;

/// Registry pre-loaded with the built-in application schemas.
pub fn catalog_registry() -> Result<SchemaRegistry, SchemaError> {
    let _ = env_logger::builder().is_test(true).try_init();
    SchemaRegistry::with_catalog()
}

/// Builds a raw field mapping from (name, value) pairs.
pub fn raw_fields(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
