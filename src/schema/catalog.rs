//! Built-in schema definitions for the collections the application stores.
//!
//! Each schema maps to a collection named after the lowercased schema name:
//! User -> "user", Product -> "product", Inquiry -> "inquiry".

use super::types::{FieldConstraint, FieldDefinition, FieldType, Schema};

/// Users collection schema.
pub fn user_schema() -> Schema {
    Schema::new("User")
        .with_field("name", FieldDefinition::new(FieldType::Text))
        .with_field("email", FieldDefinition::new(FieldType::Text))
        .with_field("address", FieldDefinition::new(FieldType::Text))
        .with_field(
            "age",
            FieldDefinition::optional(FieldType::Integer)
                .with_constraint(FieldConstraint::Range { min: 0, max: 120 }),
        )
        .with_field(
            "is_active",
            FieldDefinition::optional(FieldType::Boolean).with_default(true.into()),
        )
}

/// Products collection schema.
pub fn product_schema() -> Schema {
    Schema::new("Product")
        .with_field("title", FieldDefinition::new(FieldType::Text))
        .with_field("description", FieldDefinition::optional(FieldType::Text))
        .with_field(
            "price",
            FieldDefinition::new(FieldType::Float).with_constraint(FieldConstraint::NonNegative),
        )
        .with_field("category", FieldDefinition::new(FieldType::Text))
        .with_field(
            "in_stock",
            FieldDefinition::optional(FieldType::Boolean).with_default(true.into()),
        )
}

/// Inquiries from the website contact/booking form.
///
/// `preferred_date` is free text intended as a YYYY-MM-DD calendar date;
/// it is stored and validated only as text.
pub fn inquiry_schema() -> Schema {
    Schema::new("Inquiry")
        .with_field(
            "name",
            FieldDefinition::new(FieldType::Text)
                .with_constraint(FieldConstraint::MinLength { min: 2 }),
        )
        .with_field(
            "email",
            FieldDefinition::new(FieldType::Text).with_constraint(FieldConstraint::Email),
        )
        .with_field("phone", FieldDefinition::optional(FieldType::Text))
        .with_field("service_type", FieldDefinition::optional(FieldType::Text))
        .with_field("subject", FieldDefinition::optional(FieldType::Text))
        .with_field(
            "message",
            FieldDefinition::new(FieldType::Text)
                .with_constraint(FieldConstraint::MinLength { min: 5 })
                .with_constraint(FieldConstraint::MaxLength { max: 2000 }),
        )
        .with_field("preferred_date", FieldDefinition::optional(FieldType::Text))
}

/// All built-in schemas, in registration order.
pub fn builtin_schemas() -> Vec<Schema> {
    vec![user_schema(), product_schema(), inquiry_schema()]
}
