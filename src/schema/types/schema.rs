use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::field::FieldDefinition;

/// A named record type: the set of recognized fields and their validation
/// rules, plus the storage identifier its records are grouped under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    /// Explicit storage identifier. When unset, the lowercased schema name
    /// is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    pub fields: HashMap<String, FieldDefinition>,
}

impl Schema {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collection: None,
            fields: HashMap::new(),
        }
    }

    /// Overrides the storage identifier derived from the schema name.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field: FieldDefinition) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn add_field(&mut self, name: impl Into<String>, field: FieldDefinition) {
        self.fields.insert(name.into(), field);
    }

    /// The storage identifier for this schema's records: the explicit
    /// collection when one is set, otherwise the lowercased schema name.
    pub fn collection_id(&self) -> String {
        match &self.collection {
            Some(collection) => collection.clone(),
            None => self.name.to_lowercase(),
        }
    }
}
