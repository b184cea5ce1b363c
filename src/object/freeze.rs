//! The readonly projector.
//!
//! [`freeze`] turns a value into a [`Frozen`] view; [`defrost`] relabels it
//! back. Immutability is enforced at two levels:
//!
//! - **Type level**: [`Frozen<T>`] implements [`Deref`] but not `DerefMut`, so
//!   no `&mut` access to the value (or anything inside it) can be obtained
//!   through the view.
//! - **Runtime**: the shared nodes of a dynamic [`Value`](super::Value) graph
//!   can be reached through other handles, so [`Freeze::seal`] also marks
//!   every reachable [`Record`](super::Record) and
//!   [`Sequence`](super::Sequence) as sealed. Sealed nodes reject writes from
//!   every alias with [`ObjectError::Frozen`](super::ObjectError::Frozen).
//!
//! Sealing is irreversible. [`defrost`] only removes the type-level marker;
//! to get a writable copy, deep-clone after defrosting (or use
//! [`Frozen::thaw`]).
//!
//! Function values are not frozen.
//!
//! # Examples
//!
//! ```rust
//! use frostpipe::object::freeze;
//!
//! let frozen = freeze(vec![1, 2, 3]);
//! assert_eq!(frozen.len(), 3);
//! ```
//!
//! Mutation through a frozen view does not compile:
//!
//! ```rust,compile_fail
//! use frostpipe::object::freeze;
//!
//! let mut frozen = freeze(vec![1, 2, 3]);
//! frozen.push(4);
//! ```
//!
//! Neither does freezing a value with unchecked interior mutability:
//!
//! ```rust,compile_fail
//! use std::cell::RefCell;
//! use frostpipe::object::freeze;
//!
//! let frozen = freeze(RefCell::new(1));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

use super::{DeepClone, ObjectError};

/// A value whose reachable shared nodes can be sealed against writes.
///
/// Plain owned data needs no runtime flag (the [`Frozen`] wrapper already
/// forbids `&mut` access), so for most types `seal` only recurses into
/// children that might contain dynamic values.
///
/// `Cell`, `RefCell` and `Mutex` intentionally do not implement this trait.
pub trait Freeze {
    /// Seals every shared node reachable from `self`.
    ///
    /// Must be idempotent and must terminate on cyclic graphs.
    fn seal(&self);
}

/// A readonly view of a value.
///
/// Obtained from [`freeze`], [`clone`](super::clone) or
/// [`update`](super::update). Dereferences to `&T`; there is no way to get
/// `&mut T` without giving up the view via [`defrost`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frozen<T>(T);

impl<T> Frozen<T> {
    /// Gives up the readonly view. Same as [`defrost`].
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Returns an independent, writable deep copy of the frozen value.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::CyclicStructure`] for cyclic graphs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frostpipe::object::freeze;
    /// use frostpipe::record;
    ///
    /// let frozen = freeze(record! { "count" => 1 });
    /// let mut writable = frozen.thaw().unwrap();
    ///
    /// assert!(writable.set("count", 2).is_ok());
    /// assert!(frozen.clone().into_inner().set("count", 3).is_err());
    /// ```
    pub fn thaw(&self) -> Result<T, ObjectError>
    where
        T: DeepClone,
    {
        self.0.deep_clone()
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Frozen<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Frozen<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Frozen").field(&self.0).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Frozen<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

/// Seals `value` and returns it as a readonly view.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::{ObjectError, ValueKind, freeze};
/// use frostpipe::record;
///
/// let user = record! { "name" => "John" };
/// let mut alias = user.clone();
/// let frozen = freeze(user);
///
/// // The alias shares the sealed node, so the write is rejected at runtime.
/// assert_eq!(
///     alias.set("name", "Jane"),
///     Err(ObjectError::Frozen { kind: ValueKind::Record })
/// );
/// assert_eq!(frozen.get("name").and_then(|name| name.as_str().map(str::to_owned)), Some("John".to_string()));
/// ```
pub fn freeze<T: Freeze>(value: T) -> Frozen<T> {
    value.seal();
    Frozen(value)
}

/// Relabels a readonly view as a plain value.
///
/// No copy is made and sealed nodes stay sealed. Deep-clone the result when a
/// writable value is needed.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::{defrost, freeze};
///
/// let mut numbers = defrost(freeze(vec![1, 2]));
/// numbers.push(3);
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
#[inline]
pub fn defrost<T>(frozen: Frozen<T>) -> T {
    frozen.0
}

// =============================================================================
// Freeze implementations
// =============================================================================

macro_rules! impl_freeze_noop {
    ($($type:ty),* $(,)?) => {
        $(
            impl Freeze for $type {
                #[inline]
                fn seal(&self) {}
            }
        )*
    };
}

impl_freeze_noop!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String, &'static str, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
);

impl<Tz: TimeZone> Freeze for DateTime<Tz> {
    #[inline]
    fn seal(&self) {}
}

impl<A, R> Freeze for fn(A) -> R {
    #[inline]
    fn seal(&self) {}
}

impl<T: Freeze> Freeze for Option<T> {
    fn seal(&self) {
        if let Some(value) = self {
            value.seal();
        }
    }
}

impl<T: Freeze> Freeze for Box<T> {
    fn seal(&self) {
        (**self).seal();
    }
}

impl<T: Freeze> Freeze for Rc<T> {
    fn seal(&self) {
        (**self).seal();
    }
}

impl<T: Freeze> Freeze for Arc<T> {
    fn seal(&self) {
        (**self).seal();
    }
}

impl<T: Freeze> Freeze for Vec<T> {
    fn seal(&self) {
        self.iter().for_each(Freeze::seal);
    }
}

impl<T: Freeze> Freeze for VecDeque<T> {
    fn seal(&self) {
        self.iter().for_each(Freeze::seal);
    }
}

impl<K: Freeze, V: Freeze, S> Freeze for HashMap<K, V, S> {
    fn seal(&self) {
        for (key, value) in self {
            key.seal();
            value.seal();
        }
    }
}

impl<K: Freeze, V: Freeze> Freeze for BTreeMap<K, V> {
    fn seal(&self) {
        for (key, value) in self {
            key.seal();
            value.seal();
        }
    }
}

impl<T: Freeze, S> Freeze for HashSet<T, S> {
    fn seal(&self) {
        self.iter().for_each(Freeze::seal);
    }
}

impl<T: Freeze> Freeze for BTreeSet<T> {
    fn seal(&self) {
        self.iter().for_each(Freeze::seal);
    }
}

impl<T: Freeze> Freeze for Frozen<T> {
    fn seal(&self) {
        self.0.seal();
    }
}

macro_rules! impl_freeze_for_tuple {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Freeze),+> Freeze for ($($name,)+) {
                fn seal(&self) {
                    $(self.$index.seal();)+
                }
            }
        )*
    };
}

impl_freeze_for_tuple!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freeze_then_defrost_is_identity_for_owned_data() {
        let original = vec![String::from("a"), String::from("b")];
        let round_tripped = defrost(freeze(original.clone()));
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn test_frozen_debug_wraps_inner() {
        let frozen = freeze(42);
        assert_eq!(format!("{frozen:?}"), "Frozen(42)");
        assert_eq!(format!("{frozen}"), "42");
    }

    #[test]
    fn test_thaw_returns_independent_copy() {
        let frozen = freeze(Rc::new(vec![1, 2, 3]));
        let thawed = frozen.thaw().unwrap();
        assert_eq!(thawed, *frozen);
        assert!(!Rc::ptr_eq(&thawed, &*frozen));
    }
}
