//! JSON loading of schema definitions.
//!
//! Schema definitions are plain serde documents, so collections can be
//! declared in JSON files and loaded at startup instead of (or alongside)
//! the built-in catalog.

use std::path::Path;

use log::{info, warn};

use super::core::SchemaRegistry;
use super::types::{Schema, SchemaError};

/// Parses a schema definition from a JSON document.
pub fn parse_schema_json(json_str: &str) -> Result<Schema, SchemaError> {
    serde_json::from_str(json_str)
        .map_err(|e| SchemaError::InvalidData(format!("Invalid JSON schema definition: {}", e)))
}

impl SchemaRegistry {
    /// Parses a schema definition from a JSON string, validates it, and
    /// registers it.
    pub fn load_schema_from_json(&mut self, json_str: &str) -> Result<(), SchemaError> {
        let schema = parse_schema_json(json_str)?;
        info!(
            "Parsed schema definition '{}' with {} field(s)",
            schema.name,
            schema.fields.len()
        );
        self.register(schema)
    }

    /// Loads a schema definition from a JSON file and registers it.
    pub fn load_schema_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), SchemaError> {
        let path = path.as_ref();
        let json_str = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read schema file {}: {}", path.display(), e);
            SchemaError::InvalidData(format!("Failed to read schema file: {}", e))
        })?;

        info!("Loading schema definition from {}", path.display());
        self.load_schema_from_json(&json_str)
    }
}
