//! Message templates and the JSON form consumed by presentation layers.

use conform::prelude::*;
use insta::assert_snapshot;
use serde_json::json;

#[test]
fn validation_message() {
    let err = number().validate(Some(&Value::from("3")), "retries").unwrap_err();
    assert_snapshot!(err.to_string(), @r#"Expected retries to be number, but instead got "3" (string)"#);
}

#[test]
fn invalid_property_message() {
    let v = props! { "foo" => required(string().or(equals(38))) };
    let value = Value::from(json!({"foo": 93}));
    let err = v.validate(Some(&value), "options").unwrap_err();
    assert_snapshot!(err.to_string(), @"Expected property 'foo' of `options` to be string or 38, but instead got 93 (number)");
}

#[test]
fn invalid_element_message() {
    let err = elements(null())
        .validate(Some(&Value::from(json!([null, {"a": [1, "b"]}]))), "slots")
        .unwrap_err();
    assert_snapshot!(err.to_string(), @r#"Expected item 1 of `slots` to be null, but instead got {a: [1, "b"]} (object)"#);
}

#[test]
fn json_form_of_nested_failure() {
    let v = props! { "sub" => props! { "x" => string() } };
    let err = v
        .validate(Some(&Value::from(json!({"sub": {"x": 1}}))), "options")
        .unwrap_err();

    assert_eq!(
        err.to_json_value(),
        json!({
            "type": "invalid.property",
            "message": "Expected property 'x' of `options.sub` to be string, but instead got 1 (number)",
            "itemName": "x",
            "containerName": "options.sub",
            "qualifiedName": "options.sub.x",
            "expected": "string",
            "expectedLabel": "string",
            "describedValue": "1 (number)",
            "required": false,
        })
    );
}

#[test]
fn json_form_reports_index_as_number() {
    let err = elements(string())
        .validate(Some(&Value::from(json!(["a", 1]))), "tags")
        .unwrap_err();
    let json = err.to_json_value();

    assert_eq!(json["itemName"], json!(1));
    assert_eq!(json["qualifiedName"], "tags[1]");
}
