//! End-to-end validation of the built-in schemas through the registry.

mod common;

use common::{catalog_registry, raw_fields};
use formfold::{ConstraintFailure, FieldValue};
use serde_json::json;

fn valid_user() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        ("name", json!("Alex Smith")),
        ("email", json!("alex@example.com")),
        ("address", json!("1 Main St")),
    ]
}

fn valid_inquiry() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        ("name", json!("Jo")),
        ("email", json!("jo@x.com")),
        ("message", json!("Hello there")),
    ]
}

#[test]
fn every_required_field_is_enforced() {
    let registry = catalog_registry().unwrap();

    for (schema_name, input, required) in [
        ("User", valid_user(), vec!["name", "email", "address"]),
        (
            "Product",
            vec![
                ("title", json!("Widget")),
                ("price", json!(9.99)),
                ("category", json!("tools")),
            ],
            vec!["title", "price", "category"],
        ),
        ("Inquiry", valid_inquiry(), vec!["name", "email", "message"]),
    ] {
        for field in required {
            let mut raw = raw_fields(&input);
            raw.remove(field);
            let err = registry.validate(schema_name, &raw).unwrap_err();
            let validation = err.as_validation().unwrap();
            assert!(
                validation.names_field(field),
                "{}.{} missing must be reported",
                schema_name,
                field
            );
        }
    }
}

#[test]
fn well_formed_input_round_trips() {
    let registry = catalog_registry().unwrap();

    let raw = raw_fields(&[
        ("name", json!("Alex Smith")),
        ("email", json!("alex@example.com")),
        ("address", json!("1 Main St")),
        ("age", json!(34)),
        ("is_active", json!(false)),
    ]);
    let record = registry.validate("User", &raw).unwrap();

    assert_eq!(
        record.get("name").and_then(|v| v.as_text()),
        Some("Alex Smith")
    );
    assert_eq!(record.get("age").and_then(|v| v.as_integer()), Some(34));
    assert_eq!(
        record.get("is_active").and_then(|v| v.as_boolean()),
        Some(false)
    );
}

#[test]
fn revalidating_a_validated_record_is_idempotent() {
    let registry = catalog_registry().unwrap();

    let raw = raw_fields(&[
        ("name", json!("Jo")),
        ("email", json!("jo@x.com")),
        ("message", json!("Hello there")),
        ("phone", json!("555-0100")),
    ]);
    let first = registry.validate("Inquiry", &raw).unwrap();
    let second = registry.validate("Inquiry", &first.to_raw()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn user_age_boundaries() {
    let registry = catalog_registry().unwrap();

    for age in [0, 120] {
        let mut raw = raw_fields(&valid_user());
        raw.insert("age".to_string(), json!(age));
        assert!(
            registry.validate("User", &raw).is_ok(),
            "age {} must pass",
            age
        );
    }

    for age in [-1, 121] {
        let mut raw = raw_fields(&valid_user());
        raw.insert("age".to_string(), json!(age));
        let err = registry.validate("User", &raw).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert!(validation.names_field("age"), "age {} must fail", age);
        assert_eq!(
            validation.violations[0].constraint,
            ConstraintFailure::OutOfRange { min: 0, max: 120 }
        );
    }
}

#[test]
fn inquiry_message_length_boundaries() {
    let registry = catalog_registry().unwrap();

    for len in [5, 2000] {
        let mut raw = raw_fields(&valid_inquiry());
        raw.insert("message".to_string(), json!("x".repeat(len)));
        assert!(
            registry.validate("Inquiry", &raw).is_ok(),
            "message of length {} must pass",
            len
        );
    }

    for len in [4, 2001] {
        let mut raw = raw_fields(&valid_inquiry());
        raw.insert("message".to_string(), json!("x".repeat(len)));
        let err = registry.validate("Inquiry", &raw).unwrap_err();
        assert!(
            err.as_validation().unwrap().names_field("message"),
            "message of length {} must fail",
            len
        );
    }
}

#[test]
fn inquiry_email_syntax() {
    let registry = catalog_registry().unwrap();

    let mut raw = raw_fields(&valid_inquiry());
    raw.insert("email".to_string(), json!("a@b.com"));
    assert!(registry.validate("Inquiry", &raw).is_ok());

    raw.insert("email".to_string(), json!("not-an-email"));
    let err = registry.validate("Inquiry", &raw).unwrap_err();
    let validation = err.as_validation().unwrap();
    assert!(validation.names_field("email"));
    assert_eq!(
        validation.violations[0].constraint,
        ConstraintFailure::InvalidEmail
    );
}

#[test]
fn defaults_apply_when_unset() {
    let registry = catalog_registry().unwrap();

    let user = registry.validate("User", &raw_fields(&valid_user())).unwrap();
    assert_eq!(user.get("is_active"), Some(&FieldValue::Boolean(true)));

    let product = registry
        .validate(
            "Product",
            &raw_fields(&[
                ("title", json!("Widget")),
                ("price", json!(9.99)),
                ("category", json!("tools")),
            ]),
        )
        .unwrap();
    assert_eq!(product.get("in_stock"), Some(&FieldValue::Boolean(true)));
}

#[test]
fn minimal_inquiry_leaves_optionals_absent() {
    let registry = catalog_registry().unwrap();

    let record = registry
        .validate("Inquiry", &raw_fields(&valid_inquiry()))
        .unwrap();

    assert_eq!(record.collection(), "inquiry");
    for field in ["phone", "service_type", "subject", "preferred_date"] {
        assert!(
            record.get(field).is_none(),
            "{} must be absent, not defaulted",
            field
        );
    }
}

#[test]
fn short_inquiry_name_fails_naming_the_field() {
    let registry = catalog_registry().unwrap();

    let mut raw = raw_fields(&valid_inquiry());
    raw.insert("name".to_string(), json!("J"));
    let err = registry.validate("Inquiry", &raw).unwrap_err();

    let validation = err.as_validation().unwrap();
    assert!(validation.names_field("name"));
    assert_eq!(
        validation.violations[0].constraint,
        ConstraintFailure::TooShort { min: 2 }
    );
    assert_eq!(validation.violations[0].value, json!("J"));
}

#[test]
fn product_price_must_be_non_negative() {
    let registry = catalog_registry().unwrap();

    let mut raw = raw_fields(&[
        ("title", json!("Widget")),
        ("price", json!(-0.01)),
        ("category", json!("tools")),
    ]);
    let err = registry.validate("Product", &raw).unwrap_err();
    assert!(err.as_validation().unwrap().names_field("price"));

    raw.insert("price".to_string(), json!(0.0));
    assert!(registry.validate("Product", &raw).is_ok());
}
