//! The dynamic value graph.
//!
//! [`Value`] models arbitrarily nested in-memory data whose shape is only
//! known at runtime. Scalars are held inline; [`Record`] and [`Sequence`] are
//! shared, reference-counted nodes, so a `Value` graph can express aliasing,
//! shallow copies and reference cycles.
//!
//! | Operation               | Effect on nested nodes      |
//! |-------------------------|-----------------------------|
//! | `value.clone()`         | shared (alias)              |
//! | `value.deep_clone()?`   | copied, unsealed            |
//! | `freeze(value)`         | sealed in place             |
//!
//! # Examples
//!
//! ```rust
//! use frostpipe::object::{DeepClone, Value};
//! use frostpipe::record;
//!
//! let original = record! { "phone" => record! { "storage" => 512 } };
//!
//! let mut alias = original.clone();
//! alias.set_path(&["phone", "storage"], 1024).unwrap();
//! assert_eq!(original.get_path(&["phone", "storage"]), Some(Value::from(1024)));
//!
//! let mut copy = original.deep_clone().unwrap();
//! copy.set_path(&["phone", "storage"], 64).unwrap();
//! assert_eq!(original.get_path(&["phone", "storage"]), Some(Value::from(1024)));
//! ```

use std::cell::RefCell;
use std::fmt;

use chrono::{DateTime, Utc};

use super::deep_clone::PathSegment;
use super::{CloneContext, DeepClone, Freeze, Function, ObjectError, Record, Sequence};

/// The shape of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Integer`]
    Integer,
    /// [`Value::Float`]
    Float,
    /// [`Value::Text`]
    Text,
    /// [`Value::Date`]
    Date,
    /// [`Value::Sequence`]
    Sequence,
    /// [`Value::Record`]
    Record,
    /// [`Value::Function`]
    Function,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Date => "date",
            Self::Sequence => "sequence",
            Self::Record => "record",
            Self::Function => "function",
        })
    }
}

/// A dynamically shaped value.
///
/// Equality is structural and deep: two records are equal when they hold
/// equal fields, regardless of whether they share a node. `Integer(1)` and
/// `Float(1.0)` are not equal. Floats compare by identity rather than IEEE
/// equality: `NaN` equals `NaN`, while `0.0` and `-0.0` differ. Comparing
/// cyclic graphs does not terminate.
///
/// `Debug` output is cycle-safe; a back-reference prints as `[Circular]`.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed 64-bit integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// An owned string.
    Text(String),
    /// A UTC timestamp.
    Date(DateTime<Utc>),
    /// A shared, ordered list of values.
    Sequence(Sequence),
    /// A shared map from field names to values.
    Record(Record),
    /// A callable, never cloned or frozen.
    Function(Function),
}

impl Value {
    /// Returns the shape of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Date(_) => ValueKind::Date,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Record(_) => ValueKind::Record,
            Self::Function(_) => ValueKind::Function,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number as a float. Integers are converted.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the timestamp, if this is a date.
    #[must_use]
    pub const fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the record handle, if this is a record.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the sequence handle, if this is a sequence.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Returns the function, if this is a function.
    #[must_use]
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns `true` if both values are handles to the same record, sequence
    /// or function. Scalars are never identical in this sense.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Record(left), Self::Record(right)) => left.ptr_eq(right),
            (Self::Sequence(left), Self::Sequence(right)) => left.ptr_eq(right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }

    /// Returns the field `key` of a record. `None` for other kinds.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Self> {
        self.as_record().and_then(|record| record.get(key))
    }

    /// Returns the element at `index` of a sequence. `None` for other kinds.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<Self> {
        self.as_sequence().and_then(|sequence| sequence.get(index))
    }

    /// Sets the field `key` of a record, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::TypeMismatch`] if this is not a record, or
    /// [`ObjectError::Frozen`] if the record is sealed.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Self>,
    ) -> Result<Option<Self>, ObjectError> {
        self.expect_record()?.set(key, value)
    }

    /// Appends to a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::TypeMismatch`] if this is not a sequence, or
    /// [`ObjectError::Frozen`] if the sequence is sealed.
    pub fn push(&mut self, value: impl Into<Self>) -> Result<(), ObjectError> {
        match self {
            Self::Sequence(sequence) => sequence.push(value),
            other => Err(ObjectError::TypeMismatch {
                expected: ValueKind::Sequence,
                actual: other.kind(),
            }),
        }
    }

    /// Follows `path` through records (by key) and sequences (by numeric
    /// index). An empty path yields the value itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frostpipe::object::Value;
    /// use frostpipe::{record, sequence};
    ///
    /// let order = record! { "items" => sequence![record! { "sku" => "A-1" }] };
    /// assert_eq!(order.get_path(&["items", "0", "sku"]), Some(Value::from("A-1")));
    /// assert_eq!(order.get_path(&["items", "1", "sku"]), None);
    /// ```
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<Self> {
        path.iter()
            .try_fold(self.clone(), |current, segment| current.child(segment).ok())
    }

    /// Replaces the value at `path`, returning the previous one.
    ///
    /// Every segment but the last must already exist. The last segment may add
    /// a new record field, but only replaces existing sequence elements. An
    /// empty path replaces `self`.
    ///
    /// # Errors
    ///
    /// - [`ObjectError::MissingField`] for an absent intermediate field or a
    ///   non-numeric sequence segment
    /// - [`ObjectError::IndexOutOfBounds`] for a sequence index past the end
    /// - [`ObjectError::TypeMismatch`] when a segment reaches into a scalar
    /// - [`ObjectError::Frozen`] when the target node is sealed
    pub fn set_path(
        &mut self,
        path: &[&str],
        value: impl Into<Self>,
    ) -> Result<Option<Self>, ObjectError> {
        let Some((last, parents)) = path.split_last() else {
            return Ok(Some(std::mem::replace(self, value.into())));
        };
        let parent = parents
            .iter()
            .try_fold(self.clone(), |current, segment| current.child(segment))?;
        parent.set_child(last, value.into())
    }

    /// Checks that no record or sequence is reachable from itself.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::CyclicStructure`] naming the path to the first
    /// back-reference found.
    pub fn check_acyclic(&self) -> Result<(), ObjectError> {
        self.visit(&mut CloneContext::new())
    }

    fn visit(&self, context: &mut CloneContext) -> Result<(), ObjectError> {
        match self {
            Self::Record(record) => context.shared(record.address(), |context| {
                record.with_fields(|fields| {
                    fields.iter().try_for_each(|(key, value)| {
                        context.scoped(PathSegment::Field(key.clone()), |context| {
                            value.visit(context)
                        })
                    })
                })
            }),
            Self::Sequence(sequence) => context.shared(sequence.address(), |context| {
                sequence.with_values(|values| {
                    values.iter().enumerate().try_for_each(|(index, value)| {
                        context.scoped(PathSegment::Index(index), |context| value.visit(context))
                    })
                })
            }),
            _ => Ok(()),
        }
    }

    fn expect_record(&self) -> Result<&Record, ObjectError> {
        self.as_record().ok_or(ObjectError::TypeMismatch {
            expected: ValueKind::Record,
            actual: self.kind(),
        })
    }

    fn child(&self, segment: &str) -> Result<Self, ObjectError> {
        match self {
            Self::Record(record) => record.get(segment).ok_or_else(|| missing_field(segment)),
            Self::Sequence(sequence) => {
                let index = parse_index(segment)?;
                sequence.get(index).ok_or(ObjectError::IndexOutOfBounds {
                    index,
                    length: sequence.len(),
                })
            }
            other => Err(ObjectError::TypeMismatch {
                expected: ValueKind::Record,
                actual: other.kind(),
            }),
        }
    }

    fn set_child(&self, segment: &str, value: Self) -> Result<Option<Self>, ObjectError> {
        match self {
            Self::Record(record) => record.set(segment, value),
            Self::Sequence(sequence) => sequence.set(parse_index(segment)?, value).map(Some),
            other => Err(ObjectError::TypeMismatch {
                expected: ValueKind::Record,
                actual: other.kind(),
            }),
        }
    }
}

fn missing_field(key: &str) -> ObjectError {
    ObjectError::MissingField {
        key: key.to_owned(),
    }
}

fn parse_index(segment: &str) -> Result<usize, ObjectError> {
    segment.parse().map_err(|_| missing_field(segment))
}

// =============================================================================
// Equality
// =============================================================================

/// `NaN` equals `NaN`; `0.0` and `-0.0` differ.
fn same_float(left: f64, right: f64) -> bool {
    left.to_bits() == right.to_bits() || (left.is_nan() && right.is_nan())
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => same_float(*left, *right),
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Date(left), Self::Date(right)) => left == right,
            (Self::Sequence(left), Self::Sequence(right)) => left == right,
            (Self::Record(left), Self::Record(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left == right,
            _ => false,
        }
    }
}

// =============================================================================
// Debug
// =============================================================================

/// Cycle-aware debug adapter. `ancestors` holds the nodes being printed.
struct Inspect<'a> {
    value: &'a Value,
    ancestors: &'a RefCell<Vec<usize>>,
}

impl Inspect<'_> {
    fn nested(&self, address: usize, body: impl FnOnce() -> fmt::Result) -> Option<fmt::Result> {
        if self.ancestors.borrow().contains(&address) {
            return None;
        }
        self.ancestors.borrow_mut().push(address);
        let result = body();
        self.ancestors.borrow_mut().pop();
        Some(result)
    }
}

impl fmt::Debug for Inspect<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ancestors = self.ancestors;
        let printed = match self.value {
            Value::Null => return formatter.write_str("null"),
            Value::Bool(value) => return fmt::Debug::fmt(value, formatter),
            Value::Integer(value) => return fmt::Debug::fmt(value, formatter),
            Value::Float(value) => return fmt::Debug::fmt(value, formatter),
            Value::Text(value) => return fmt::Debug::fmt(value, formatter),
            Value::Date(value) => return write!(formatter, "Date({})", value.to_rfc3339()),
            Value::Function(function) => return fmt::Debug::fmt(function, formatter),
            Value::Sequence(sequence) => self.nested(sequence.address(), || {
                sequence.with_values(|values| {
                    formatter
                        .debug_list()
                        .entries(values.iter().map(|value| Inspect { value, ancestors }))
                        .finish()
                })
            }),
            Value::Record(record) => self.nested(record.address(), || {
                record.with_fields(|fields| {
                    formatter
                        .debug_map()
                        .entries(
                            fields
                                .iter()
                                .map(|(key, value)| (key, Inspect { value, ancestors })),
                        )
                        .finish()
                })
            }),
        };
        printed.unwrap_or_else(|| formatter.write_str("[Circular]"))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ancestors = RefCell::new(Vec::new());
        fmt::Debug::fmt(
            &Inspect {
                value: self,
                ancestors: &ancestors,
            },
            formatter,
        )
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Record(self.clone()), formatter)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Sequence(self.clone()), formatter)
    }
}

// =============================================================================
// Cloning and sealing
// =============================================================================

impl DeepClone for Value {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        Ok(match self {
            Self::Null => Self::Null,
            Self::Bool(value) => Self::Bool(*value),
            Self::Integer(value) => Self::Integer(*value),
            Self::Float(value) => Self::Float(*value),
            Self::Text(value) => Self::Text(value.clone()),
            Self::Date(value) => Self::Date(*value),
            Self::Sequence(sequence) => Self::Sequence(sequence.deep_clone_in(context)?),
            Self::Record(record) => Self::Record(record.deep_clone_in(context)?),
            Self::Function(function) => Self::Function(function.clone()),
        })
    }
}

impl Freeze for Value {
    fn seal(&self) {
        match self {
            Self::Sequence(sequence) => sequence.seal(),
            Self::Record(record) => record.seal(),
            _ => {}
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<V: Into<Self>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<V: Into<Self>> From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record, sequence};
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, ValueKind::Null, "null")]
    #[case(Value::from(true), ValueKind::Bool, "boolean")]
    #[case(Value::from(1), ValueKind::Integer, "integer")]
    #[case(Value::from(1.5), ValueKind::Float, "float")]
    #[case(Value::from("a"), ValueKind::Text, "text")]
    #[case(sequence![], ValueKind::Sequence, "sequence")]
    #[case(record! {}, ValueKind::Record, "record")]
    fn test_kind_and_display(
        #[case] value: Value,
        #[case] kind: ValueKind,
        #[case] display: &str,
    ) {
        assert_eq!(value.kind(), kind);
        assert_eq!(kind.to_string(), display);
    }

    #[test]
    fn test_integer_and_float_are_distinct() {
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_eq!(Value::from(1).as_f64(), Some(1.0));
    }

    #[rstest]
    #[case(f64::NAN, f64::NAN, true)]
    #[case(0.0, -0.0, false)]
    #[case(f64::INFINITY, f64::INFINITY, true)]
    #[case(0.1 + 0.2, 0.3, false)]
    fn test_float_equality_is_by_identity(
        #[case] left: f64,
        #[case] right: f64,
        #[case] equal: bool,
    ) {
        assert_eq!(Value::from(left) == Value::from(right), equal);
    }

    #[test]
    fn test_set_on_scalar_is_type_mismatch() {
        let mut value = Value::from(3);
        assert_eq!(
            value.set("a", 1),
            Err(ObjectError::TypeMismatch {
                expected: ValueKind::Record,
                actual: ValueKind::Integer
            })
        );
    }

    #[test]
    fn test_set_path_with_empty_path_replaces_self() {
        let mut value = Value::from("old");
        assert_eq!(value.set_path(&[], 7), Ok(Some(Value::from("old"))));
        assert_eq!(value, Value::from(7));
    }

    #[rstest]
    #[case(&["missing", "x"], ObjectError::MissingField { key: "missing".to_string() })]
    #[case(&["tags", "x"], ObjectError::MissingField { key: "x".to_string() })]
    #[case(&["tags", "5"], ObjectError::IndexOutOfBounds { index: 5, length: 1 })]
    #[case(&["name", "first"], ObjectError::TypeMismatch { expected: ValueKind::Record, actual: ValueKind::Text })]
    fn test_set_path_errors(#[case] path: &[&str], #[case] expected: ObjectError) {
        let mut value = record! { "name" => "John", "tags" => sequence!["a"] };
        assert_eq!(value.set_path(path, 1), Err(expected));
    }

    #[test]
    fn test_set_path_into_sequence() {
        let mut value = record! { "tags" => sequence!["a", "b"] };
        assert_eq!(
            value.set_path(&["tags", "1"], "c"),
            Ok(Some(Value::from("b")))
        );
        assert_eq!(value.get_path(&["tags", "1"]), Some(Value::from("c")));
    }

    #[test]
    fn test_debug_format() {
        let value = record! { "a" => sequence![1, "x", ()], "b" => 1.5 };
        assert_eq!(format!("{value:?}"), r#"{"a": [1, "x", null], "b": 1.5}"#);
    }

    #[test]
    fn test_debug_marks_back_reference() {
        let mut value = record! { "name" => "loop" };
        let alias = value.clone();
        value.set("self", alias).unwrap();
        assert_eq!(
            format!("{value:?}"),
            r#"{"name": "loop", "self": [Circular]}"#
        );
    }

    #[test]
    fn test_check_acyclic_reports_path() {
        let value = record! { "items" => sequence![record! {}] };
        let mut item = value.get_path(&["items", "0"]).unwrap();
        item.set("parent", value.clone()).unwrap();
        assert_eq!(
            value.check_acyclic(),
            Err(ObjectError::CyclicStructure {
                path: "$.items[0].parent".to_string()
            })
        );
        // Break the cycle so the nodes can be dropped.
        item.set("parent", ()).unwrap();
        assert_eq!(value.check_acyclic(), Ok(()));
    }

    #[test]
    fn test_from_option_and_vec() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
        assert_eq!(Value::from(vec![1, 2]), sequence![1, 2]);
    }
}
