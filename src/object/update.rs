//! The immutable-update engine.
//!
//! [`update`] and [`try_update`] turn a mutator into a reusable function from
//! `&T` to a new [`Frozen<T>`]. The mutator receives a deep clone it may edit
//! freely; the input is never touched.
//!
//! ```text
//! original --deep_clone--> working copy --mutator--> edited --freeze--> Frozen<T>
//! ```
//!
//! The clone happens before the mutator runs, so a failing mutator leaves the
//! original exactly as it was. Nothing is retried.

use super::{DeepClone, Freeze, Frozen, ObjectError, freeze};

/// Deep-clones `value` and returns the copy as a readonly view.
///
/// # Errors
///
/// Returns [`ObjectError::CyclicStructure`] when `value` contains a cycle.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::{Value, clone};
/// use frostpipe::record;
///
/// let original = record! { "phone" => record! { "storage" => 512 } };
/// let copy = clone(&original).unwrap();
///
/// assert_eq!(*copy, original);
/// assert!(!copy.get("phone").unwrap().ptr_eq(&original.get("phone").unwrap()));
/// ```
pub fn clone<T>(value: &T) -> Result<Frozen<T>, ObjectError>
where
    T: DeepClone + Freeze,
{
    value.deep_clone().map(freeze)
}

/// Creates a copy-on-write updater from an infallible mutator.
///
/// The returned function deep-clones its input, hands the copy to `mutator`
/// by value, and freezes whatever the mutator returns.
///
/// # Errors
///
/// The returned function fails with [`ObjectError::CyclicStructure`] when its
/// input contains a cycle; the mutator is not called in that case.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::update;
/// use frostpipe::pipe;
///
/// let scores = vec![3, 1, 2];
/// let sorted = pipe!(&scores, update(|mut scores: Vec<i32>| {
///     scores.sort_unstable();
///     scores
/// }))
/// .unwrap();
///
/// assert_eq!(scores, vec![3, 1, 2]);
/// assert_eq!(*sorted, vec![1, 2, 3]);
/// ```
pub fn update<T, F>(mutator: F) -> impl Fn(&T) -> Result<Frozen<T>, ObjectError>
where
    T: DeepClone + Freeze,
    F: Fn(T) -> T,
{
    move |original: &T| {
        let working_copy = original.deep_clone()?;
        trace_event!(trace, "applying mutator to working copy");
        Ok(freeze(mutator(working_copy)))
    }
}

/// Creates a copy-on-write updater from a fallible mutator.
///
/// Like [`update`], but the mutator returns `Result<T, E>`. A mutator error is
/// returned exactly as produced; clone errors are converted with
/// `E::from`. In both cases the input is left untouched.
///
/// # Errors
///
/// The returned function fails with the mutator's error, or with
/// `E::from(ObjectError::CyclicStructure { .. })` when its input is cyclic.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::{ObjectError, Value, try_update};
/// use frostpipe::record;
///
/// let user = record! { "name" => "John" };
/// let rename = try_update(|mut user: Value| {
///     user.set("name", "Jane")?;
///     Ok::<_, ObjectError>(user)
/// });
///
/// let renamed = rename(&user).unwrap();
/// assert_eq!(renamed.get("name"), Some(Value::from("Jane")));
/// assert_eq!(user.get("name"), Some(Value::from("John")));
/// ```
pub fn try_update<T, E, F>(mutator: F) -> impl Fn(&T) -> Result<Frozen<T>, E>
where
    T: DeepClone + Freeze,
    E: From<ObjectError>,
    F: Fn(T) -> Result<T, E>,
{
    move |original: &T| {
        let working_copy = original.deep_clone()?;
        mutator(working_copy).map(freeze).inspect_err(|_| {
            trace_event!(debug, "mutator failed, original left untouched");
        })
    }
}
