//! Registry of schema definitions keyed by entity name.

use std::collections::HashMap;

use log::info;
use serde_json::Value;

use super::catalog;
use super::types::{Schema, SchemaError, ValidatedRecord};
use super::validator::{RecordValidator, SchemaValidator};

/// Central store of schema definitions.
///
/// The registry is responsible for:
/// - Validating schema definitions at registration time
/// - Maintaining the explicit mapping from collection identifiers to
///   schemas, rejecting collisions
/// - Providing the validate-and-construct operation for raw records
///
/// Registration happens at process start; afterwards the registry is only
/// read, so shared references can be handed to any number of callers.
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
    /// Collection identifier -> owning schema name. This is the mapping
    /// table the storage layer consumes; it is populated explicitly at
    /// registration rather than re-derived from names on every lookup.
    collections: HashMap<String, String>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
            collections: HashMap::new(),
        }
    }

    /// Creates a registry pre-loaded with the built-in application schemas
    /// (User, Product, Inquiry).
    pub fn with_catalog() -> Result<Self, SchemaError> {
        let mut registry = Self::new();
        for schema in catalog::builtin_schemas() {
            registry.register(schema)?;
        }
        Ok(registry)
    }

    /// Validates and registers a schema definition.
    ///
    /// # Errors
    /// - `InvalidDefinition` if the definition is structurally unsound
    /// - `DuplicateSchema` if the entity name is already registered
    /// - `DuplicateCollection` if a distinct schema already claims the same
    ///   collection identifier (e.g. two names that lowercase identically)
    pub fn register(&mut self, schema: Schema) -> Result<(), SchemaError> {
        SchemaValidator::validate(&schema)?;

        if self.schemas.contains_key(&schema.name) {
            return Err(SchemaError::DuplicateSchema(schema.name.clone()));
        }

        let collection = schema.collection_id();
        if let Some(existing) = self.collections.get(&collection) {
            return Err(SchemaError::DuplicateCollection {
                collection,
                existing: existing.clone(),
            });
        }

        info!(
            "Registered schema '{}' for collection '{}' ({} fields)",
            schema.name,
            collection,
            schema.fields.len()
        );
        self.collections.insert(collection, schema.name.clone());
        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Retrieves a schema by name.
    pub fn get_schema(&self, schema_name: &str) -> Option<&Schema> {
        self.schemas.get(schema_name)
    }

    /// Checks if a schema exists in the registry.
    pub fn schema_exists(&self, schema_name: &str) -> bool {
        self.schemas.contains_key(schema_name)
    }

    /// Lists all registered schema names.
    pub fn list_schemas(&self) -> Vec<String> {
        self.schemas.keys().cloned().collect()
    }

    /// The storage identifier for a schema's records, if the schema is
    /// registered.
    pub fn collection_id(&self, schema_name: &str) -> Option<String> {
        self.schemas.get(schema_name).map(Schema::collection_id)
    }

    /// The full collection-to-schema mapping table, for the storage layer.
    pub fn collections(&self) -> &HashMap<String, String> {
        &self.collections
    }

    /// Validates raw field data against the named schema and constructs an
    /// immutable record.
    ///
    /// # Errors
    /// - `NotFound` if no schema with that name is registered
    /// - `Validation` carrying every failed field otherwise
    pub fn validate(
        &self,
        schema_name: &str,
        raw_fields: &HashMap<String, Value>,
    ) -> Result<ValidatedRecord, SchemaError> {
        let schema = self
            .schemas
            .get(schema_name)
            .ok_or_else(|| SchemaError::NotFound(schema_name.to_string()))?;

        RecordValidator::new(schema).validate(raw_fields)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
