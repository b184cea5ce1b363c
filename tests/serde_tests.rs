//! Tests for serializing and deserializing dynamic values.

#![cfg(feature = "serde")]

use chrono::{TimeZone, Utc};
use frostpipe::object::{Function, Value, freeze};
use frostpipe::{record, sequence};
use rstest::rstest;

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::from(true))]
#[case("-7", Value::from(-7))]
#[case("1.25", Value::from(1.25))]
#[case("\"text\"", Value::from("text"))]
#[case("[1,[2]]", sequence![1, sequence![2]])]
#[case("{\"b\":{},\"a\":[]}", record! { "a" => sequence![], "b" => record! {} })]
fn test_deserialize(#[case] json: &str, #[case] expected: Value) {
    let value: Value = serde_json::from_str(json).unwrap();
    assert_eq!(value, expected);
}

#[rstest]
fn test_round_trip_through_json() {
    let user = record! {
        "id" => 123,
        "name" => "John",
        "phone" => record! { "brand" => "Apple", "storage" => 512 },
        "tags" => sequence!["admin"],
    };
    let json = serde_json::to_string(&user).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, user);
}

#[rstest]
fn test_dates_serialize_as_rfc3339() {
    let value = record! { "at" => Utc.with_ymd_and_hms(2024, 3, 29, 4, 54, 38).unwrap() };
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"at":"2024-03-29T04:54:38.000Z"}"#
    );
}

#[rstest]
fn test_functions_refuse_to_serialize() {
    let value = sequence![Function::new(|value: &Value| value.clone())];
    let error = serde_json::to_string(&value).unwrap_err();
    assert!(error.to_string().contains("cannot serialize a function value"));
}

#[rstest]
fn test_frozen_value_serializes_like_its_content() {
    let frozen = freeze(record! { "count" => 1 });
    assert_eq!(serde_json::to_string(&*frozen).unwrap(), r#"{"count":1}"#);
}
