//! Deeply nested configuration objects.

use conform::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn options() -> Value {
    Value::from(json!({
        "foo": 83,
        "length": 11,
        "name": "hi",
        "enabled": true,
        "subconfig": {
            "name": "bob",
            "state": "DISABLED",
            "logger": {
                "enabled": false
            }
        }
    }))
}

const STATES: [&str; 4] = ["DISABLED", "ENABLED", "PROCESSING", "SHUTDOWN"];

#[test]
fn conforming_tree_passes() {
    let v = props! {
        "foo" => number(),
        "enabled" => boolean(),
        "subconfig" => props! {
            "name" => string(),
            "state" => one_of(STATES),
            "logger" => props! {
                "enabled" => boolean(),
            },
        },
    };
    assert!(v.validate(Some(&options()), "options").is_ok());
}

#[test]
fn missing_leaf_reports_full_path() {
    let v = props! {
        "foo" => number(),
        "subconfig" => props! {
            "name" => string(),
            "state" => one_of(STATES),
            "logger" => props! {
                "enabled" => boolean(),
                "filename" => required(string()),
            },
        },
    };

    let err = v.validate(Some(&options()), "options").unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidProperty);
    assert_eq!(
        err.to_string(),
        "Expected property 'filename' of `options.subconfig.logger` to be string (required), \
         but instead got undefined"
    );
    assert_eq!(err.qualified_name(), "options.subconfig.logger.filename");
}

#[test]
fn wrong_enum_member_in_nested_object() {
    let v = props! {
        "subconfig" => props! { "state" => one_of(["ENABLED"]) },
    };
    let err = v.validate(Some(&options()), "options").unwrap_err();
    let failure = err.failure();
    assert_eq!(failure.item_name, "state");
    assert_eq!(failure.container_name.as_deref(), Some("options.subconfig"));
    assert_eq!(failure.described_value, "\"DISABLED\" (string)");
}

#[test]
fn nested_properties_under_an_or_are_reported_by_the_or() {
    let v = props! {
        "subconfig" => props! { "name" => number() }.or(string()),
    };
    let err = v.validate(Some(&options()), "options").unwrap_err();
    assert_eq!(err.failure().item_name, "subconfig");
    assert_eq!(err.failure().container_name.as_deref(), Some("options"));
    assert_eq!(err.failure().expected_label, "object or string");
}

#[test]
fn validating_twice_has_no_observable_state() {
    let v = props! {
        "subconfig" => props! { "logger" => props! { "enabled" => boolean() } },
    };
    let value = options();
    assert!(v.validate(Some(&value), "options").is_ok());
    assert!(v.validate(Some(&value), "options").is_ok());
}

#[test]
fn numeric_field_names_are_not_indices() {
    let v = props! {
        "responses" => props! { "200" => required(string()), "404" => string() },
    };
    let value = Value::from(json!({"responses": {"404": "missing"}}));

    let err = v.validate(Some(&value), "api").unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidProperty);
    assert_eq!(err.qualified_name(), "api.responses.200");
    assert_eq!(
        err.to_string(),
        "Expected property '200' of `api.responses` to be string (required), \
         but instead got undefined"
    );
}
