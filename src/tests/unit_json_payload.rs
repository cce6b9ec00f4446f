use crate::error::ApiError;
use crate::features::payload::JsonPayload;
use serde_json::json;

#[test]
fn test_empty_values_are_not_json_payloads() {
    for value in [
        json!(null),
        json!(false),
        json!(0),
        json!(""),
        json!([]),
        json!({}),
    ] {
        let result = JsonPayload::from_value(value.clone());
        assert!(
            matches!(result, Err(ApiError::MalformedBody)),
            "{} should be refused",
            value
        );
    }
}

#[test]
fn test_require_reports_first_missing_field_only() {
    let payload = JsonPayload::from_value(json!({"address": "somewhere"})).unwrap();

    match payload.require(&["name", "address", "phone"]) {
        Err(ApiError::MissingField(field)) => assert_eq!(field, "name"),
        other => panic!("expected a missing field, got {:?}", other),
    }

    let payload = JsonPayload::from_value(json!({"name": "x", "address": "y"})).unwrap();
    assert!(payload.require(&["name", "address"]).is_ok());
}

#[test]
fn test_truthy_non_object_has_no_fields() {
    let payload = JsonPayload::from_value(json!("hello")).unwrap();

    assert!(matches!(
        payload.require(&["name"]),
        Err(ApiError::MissingField("name"))
    ));
}

#[test]
fn test_typed_field_access() {
    let payload = JsonPayload::from_value(json!({
        "name": "Emma",
        "price": 12,
        "ratio": 1.5,
        "whole": 12.0,
        "huge": 1e30,
        "nothing": null,
    }))
    .unwrap();

    assert_eq!(payload.text("name").unwrap(), "Emma");
    assert_eq!(payload.integer("price").unwrap(), 12);

    let err = payload.integer("ratio").unwrap_err();
    assert_eq!(err.to_string(), "ratio must be an integer");

    // whole-valued floats are integers, as long as they fit
    assert_eq!(payload.integer("whole").unwrap(), 12);
    let err = payload.integer("huge").unwrap_err();
    assert_eq!(err.to_string(), "huge must be an integer");

    // present but null is a type error, not a missing field
    let err = payload.text("nothing").unwrap_err();
    assert_eq!(err.to_string(), "nothing must be a string");

    assert!(matches!(
        payload.text("price"),
        Err(ApiError::Rejected(_))
    ));
}
