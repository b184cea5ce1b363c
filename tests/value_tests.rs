//! Tests for the dynamic `Value` graph.
//!
//! Covers construction macros, path access, typed accessors, aliasing and
//! cycle-safe formatting.

#![cfg(feature = "object")]

use chrono::{TimeZone, Utc};
use frostpipe::object::{Function, ObjectError, Record, Sequence, Value, ValueKind};
use frostpipe::{record, sequence};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_record_macro_converts_values() {
    let date = Utc.with_ymd_and_hms(2024, 3, 29, 4, 54, 38).unwrap();
    let value = record! {
        "flag" => true,
        "count" => 3_u8,
        "ratio" => 0.5_f32,
        "name" => String::from("John"),
        "born" => date,
        "nothing" => (),
        "maybe" => Some(7),
    };

    assert_eq!(value.get("flag").and_then(|flag| flag.as_bool()), Some(true));
    assert_eq!(value.get("count").and_then(|count| count.as_i64()), Some(3));
    assert_eq!(value.get("ratio").and_then(|ratio| ratio.as_f64()), Some(0.5));
    assert_eq!(value.get("born").and_then(|born| born.as_date()), Some(date));
    assert!(value.get("nothing").is_some_and(|nothing| nothing.is_null()));
    assert_eq!(value.get("maybe"), Some(Value::from(7)));
    assert_eq!(value.get("absent"), None);
}

#[rstest]
fn test_sequence_collects_from_iterator() {
    let sequence: Sequence = (1..=3).map(Value::from).collect();
    assert_eq!(Value::from(sequence), sequence![1, 2, 3]);
}

#[rstest]
fn test_record_collects_from_iterator() {
    let record: Record = [("b", Value::from(2)), ("a", Value::from(1))]
        .into_iter()
        .collect();
    assert_eq!(record.keys(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(record.values(), vec![Value::from(1), Value::from(2)]);
}

// =============================================================================
// Path access
// =============================================================================

#[rstest]
#[case(&[], true)]
#[case(&["orders"], true)]
#[case(&["orders", "0", "total"], true)]
#[case(&["orders", "1"], false)]
#[case(&["orders", "first"], false)]
#[case(&["name", "length"], false)]
fn test_get_path(#[case] path: &[&str], #[case] found: bool) {
    let customer = record! {
        "name" => "Ada",
        "orders" => sequence![record! { "total" => 42 }],
    };
    assert_eq!(customer.get_path(path).is_some(), found);
}

#[rstest]
fn test_set_path_adds_new_field_at_leaf() {
    let mut customer = record! { "address" => record! {} };
    assert_eq!(customer.set_path(&["address", "city"], "Paris"), Ok(None));
    assert_eq!(
        customer.get_path(&["address", "city"]),
        Some(Value::from("Paris"))
    );
}

#[rstest]
fn test_push_on_record_is_type_mismatch() {
    let mut customer = record! {};
    assert_eq!(
        customer.push(1),
        Err(ObjectError::TypeMismatch {
            expected: ValueKind::Sequence,
            actual: ValueKind::Record
        })
    );
}

#[rstest]
fn test_at_reads_sequence_elements() {
    let letters = sequence!["a", "b"];
    assert_eq!(letters.at(1), Some(Value::from("b")));
    assert_eq!(letters.at(2), None);
    assert_eq!(Value::from(1).at(0), None);
}

// =============================================================================
// Equality and formatting
// =============================================================================

#[rstest]
fn test_equality_is_structural() {
    let left = record! { "items" => sequence![1, 2] };
    let right = record! { "items" => sequence![1, 2] };
    assert_eq!(left, right);
    assert!(!left.ptr_eq(&right));
    assert_ne!(left, record! { "items" => sequence![2, 1] });
}

#[rstest]
fn test_functions_compare_by_identity() {
    let function = Function::new(|value: &Value| value.clone());
    let same = Value::from(function.clone());
    let other = Value::from(Function::new(|value: &Value| value.clone()));

    assert_eq!(Value::from(function), same);
    assert_ne!(same, other);
}

#[rstest]
fn test_debug_prints_dates_and_functions() {
    let value = sequence![
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        Function::new(|value: &Value| value.clone()),
    ];
    assert_eq!(
        format!("{value:?}"),
        "[Date(2024-01-02T03:04:05+00:00), [Function]]"
    );
}

#[rstest]
fn test_debug_of_shared_but_acyclic_node_is_not_circular() {
    let shared = sequence![1];
    let value = sequence![shared.clone(), shared];
    assert_eq!(format!("{value:?}"), "[[1], [1]]");
}
