#![cfg(feature = "object")]
//! Property-based tests for the immutable-update laws.
//!
//! ## Structural Cloner
//! - **Equality**: `value.deep_clone()? == value`
//! - **Independence**: mutating the clone is never visible through `value`
//! - **Sharing**: a node reachable along two paths is cloned once
//!
//! ## Readonly Projector
//! - **Relabel**: `defrost(freeze(x)) == x`
//! - **Seal**: every reachable node of `freeze(value)` rejects writes
//!
//! ## Update Engine
//! - **Purity**: `update(m)(&value)` leaves `value` equal to a prior snapshot
//! - **Reflects mutator**: `update(m)(&value) == m(value.deep_clone()?)`

use chrono::DateTime;
use frostpipe::object::{DeepClone, Function, Record, Value, defrost, freeze, update};
use frostpipe::record;
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Value> {
    let echo = Value::from(Function::new(|value: &Value| value.clone()));
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        (0_i64..4_102_444_800_000).prop_filter_map("representable date", |millis| {
            DateTime::from_timestamp_millis(millis).map(Value::from)
        }),
        "[a-z]{0,8}".prop_map(Value::from),
        Just(echo),
    ]
}

/// Trees whose records and sequences may be reachable along several paths.
fn value_tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,4}", inner.clone(), 0..4)
                .prop_map(|fields| Value::Record(Record::from_entries(fields))),
            inner.prop_map(|shared| record! { "left" => shared.clone(), "right" => shared }),
        ]
    })
}

/// Writes to the top-level node of `value`, if it has one.
fn scribble(value: &mut Value) {
    match value {
        Value::Record(record) => {
            record.set("scribbled", true).unwrap();
        }
        Value::Sequence(sequence) => {
            sequence.push("scribbled").unwrap();
        }
        other => *other = Value::from("scribbled"),
    }
}

/// Collects every record and sequence reachable from `value`.
fn nodes(value: &Value) -> Vec<Value> {
    let mut found = Vec::new();
    let mut pending = vec![value.clone()];
    while let Some(current) = pending.pop() {
        match &current {
            Value::Record(record) => pending.extend(record.values()),
            Value::Sequence(sequence) => pending.extend(sequence.to_vec()),
            _ => continue,
        }
        found.push(current);
    }
    found
}

// =============================================================================
// Structural Cloner Laws
// =============================================================================

proptest! {
    /// Equality Law: value.deep_clone()? == value
    #[test]
    fn prop_deep_clone_equality(value in value_tree()) {
        prop_assert_eq!(value.deep_clone().unwrap(), value);
    }

    /// Sharing Law: nodes shared in the source are shared in the clone
    #[test]
    fn prop_deep_clone_keeps_sharing(shared in value_tree()) {
        let diamond = record! { "left" => shared.clone(), "right" => shared.clone() };
        let copy = diamond.deep_clone().unwrap();
        let (left, right) = (copy.get("left").unwrap(), copy.get("right").unwrap());

        if matches!(shared, Value::Record(_) | Value::Sequence(_)) {
            prop_assert!(left.ptr_eq(&right));
            prop_assert!(!left.ptr_eq(&shared));
        }
        prop_assert_eq!(left, shared);
    }

    /// Independence Law: writes to every node of the clone stay in the clone
    #[test]
    fn prop_deep_clone_independence(value in value_tree()) {
        let snapshot = value.deep_clone().unwrap();
        let copy = value.deep_clone().unwrap();

        for mut node in nodes(&copy) {
            scribble(&mut node);
        }

        prop_assert_eq!(value, snapshot);
    }
}

// =============================================================================
// Readonly Projector Laws
// =============================================================================

proptest! {
    /// Relabel Law: defrost(freeze(x)) == x
    #[test]
    fn prop_freeze_defrost_relabel(values in prop::collection::vec(any::<i32>(), 0..16)) {
        prop_assert_eq!(defrost(freeze(values.clone())), values);
    }

    /// Seal Law: no reachable node of a frozen value accepts writes
    #[test]
    fn prop_freeze_seals_every_node(value in value_tree()) {
        let reachable = nodes(&value);
        let _frozen = freeze(value);

        for node in reachable {
            match &node {
                Value::Record(record) => {
                    prop_assert!(record.set("x", 1).is_err());
                }
                Value::Sequence(sequence) => {
                    prop_assert!(sequence.push(1).is_err());
                }
                _ => {}
            }
        }
    }
}

// =============================================================================
// Update Engine Laws
// =============================================================================

proptest! {
    /// Purity Law: the input is left exactly as it was
    #[test]
    fn prop_update_purity(value in value_tree()) {
        let snapshot = value.deep_clone().unwrap();

        let updated = update(|mut working: Value| {
            scribble(&mut working);
            working
        })(&value)
        .unwrap();

        prop_assert_eq!(&value, &snapshot);
        let mut expected = snapshot.deep_clone().unwrap();
        scribble(&mut expected);
        prop_assert_eq!(&*updated, &expected);
    }
}
