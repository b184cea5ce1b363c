//! Constructor macros for dynamic values.

/// Builds a [`Value::Record`](crate::object::Value::Record) from
/// `key => value` pairs.
///
/// Each value goes through `Value::from`, so nested `record!`/`sequence!`
/// calls, scalars, strings and `Option`s can be mixed freely.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::Value;
/// use frostpipe::{record, sequence};
///
/// let user = record! {
///     "id" => 123,
///     "name" => "John",
///     "nickname" => None::<&str>,
///     "roles" => sequence!["admin"],
/// };
///
/// assert_eq!(user.get("id"), Some(Value::from(123)));
/// assert_eq!(user.get("nickname"), Some(Value::Null));
/// assert_eq!(record! {}.as_record().map(|record| record.len()), Some(0));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::object::Value::Record($crate::object::Record::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::object::Value::Record($crate::object::Record::from_entries([
            $(($key, $crate::object::Value::from($value))),+
        ]))
    };
}

/// Builds a [`Value::Sequence`](crate::object::Value::Sequence) from a list
/// of values.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::Value;
/// use frostpipe::sequence;
///
/// let mixed = sequence![1, "two", 3.0];
/// assert_eq!(mixed.at(1), Some(Value::from("two")));
/// assert_eq!(sequence![].as_sequence().map(|sequence| sequence.len()), Some(0));
/// ```
#[macro_export]
macro_rules! sequence {
    ($($value:expr),* $(,)?) => {
        $crate::object::Value::Sequence($crate::object::Sequence::from_values(
            ::std::vec![$($crate::object::Value::from($value)),*],
        ))
    };
}
