//! Sequences of primitives, objects and nested sequences.

use conform::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn array_of_objects() {
    let v = elements(props! {
        "type" => string(),
        "size" => number(),
    });

    let ary1 = Value::from(json!([
        {"type": "foo", "size": 8},
        {"type": "bar", "size": 10},
        {"type": "baz", "size": 33}
    ]));
    assert!(v.validate(Some(&ary1), "ary1").is_ok());

    let ary2 = Value::from(json!([
        {"type": "foo", "size": 8},
        {"type": true, "size": 10},
        {"type": "baz", "size": 33}
    ]));
    let err = v.validate(Some(&ary2), "ary2").unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidProperty);
    assert_eq!(
        err.to_string(),
        "Expected property 'type' of `ary2[1]` to be string, but instead got true (boolean)"
    );
}

#[test]
fn array_of_arrays() {
    let v = elements(elements(string()));

    let ary = Value::from(json!([["hi", "there", "friend"], ["foo", "bar", "baz"]]));
    assert!(v.validate(Some(&ary), "ary").is_ok());

    let ary2 = Value::from(json!([["hi", "there", "friend"], ["foo", true, "baz"]]));
    let err = v.validate(Some(&ary2), "ary2").unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidElement);
    assert_eq!(
        err.to_string(),
        "Expected item 1 of `ary2[1]` to be string, but instead got true (boolean)"
    );
}

#[test]
fn array_nested_in_object() {
    let v = props! {
        "servers" => elements(props! { "port" => required(integer()) }),
    };
    let value = Value::from(json!({"servers": [{"port": 80}, {"port": 80.5}]}));
    let err = v.validate(Some(&value), "config").unwrap_err();
    assert_eq!(err.qualified_name(), "config.servers[1].port");
    assert_eq!(err.failure().container_name.as_deref(), Some("config.servers[1]"));
}

#[test]
fn leaf_failure_inside_array_in_object() {
    let v = props! { "tags" => elements(string()) };
    let value = Value::from(json!({"tags": ["a", 3]}));
    let err = v.validate(Some(&value), "config").unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidElement);
    assert_eq!(err.failure().container_name.as_deref(), Some("config.tags"));
    assert_eq!(err.failure().item_name, ItemName::Index(1));
}

#[test]
fn elements_probe_returns_failure_without_raising() {
    let v = elements(string());
    let value = Value::from(json!(["a", "b", 3]));
    let outcome = v.run(Some(&value), "list", ErrorMode::Probe, None).unwrap();
    let failure = outcome.into_failure().unwrap();
    assert_eq!(failure.kind, FailureKind::InvalidElement);
    assert_eq!(failure.item_name, ItemName::Index(2));
    assert_eq!(failure.container_name.as_deref(), Some("list"));
    assert_eq!(failure.described_value, "3 (number)");
}
