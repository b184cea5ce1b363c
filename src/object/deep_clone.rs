//! The structural cloner.
//!
//! [`DeepClone`] produces a fully independent copy of a value: every nested
//! record and sequence is allocated afresh, so edits to the copy are never
//! visible through the source (and vice versa).
//!
//! The traversal is explicit and covers a closed set of shape kinds:
//!
//! | Shape       | Types                                                    | Strategy            |
//! |-------------|----------------------------------------------------------|---------------------|
//! | Scalar      | integers, floats, `bool`, `char`, `()`, `String`, `&'static str` | copy        |
//! | Sequence    | `Vec`, `VecDeque`, sets, tuples, [`Sequence`](super::Sequence) | clone each element |
//! | Record      | `HashMap`, `BTreeMap`, [`Record`](super::Record), derived types | clone each field |
//! | Date-like   | `chrono` date and time types, [`Value::Date`](super::Value::Date) | re-construct |
//! | Shared      | `Box`, `Rc`, `Arc`                                       | fresh allocation    |
//! | Function    | `fn` pointers, [`Function`](super::Function)             | shared by reference |
//!
//! Functions are never cloned: they carry no mutable state the library can
//! see, so copies share them.
//!
//! Types with unchecked interior mutability (`Cell`, `RefCell`, `Mutex`) are
//! deliberately left out.
//!
//! # Cycles
//!
//! Shared nodes are tracked while they are being traversed. Reaching one of
//! them again means the graph is cyclic, and cloning fails with
//! [`ObjectError::CyclicStructure`] instead of recursing forever.
//!
//! A node that is merely reachable twice (a diamond, not a cycle) is cloned
//! once, and the copy shares the clone wherever the source shared the node.
//! Each shared node is therefore copied at most once per traversal.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

use super::ObjectError;

/// A value that can be copied with no shared mutable substructure.
///
/// Implement [`deep_clone_in`](DeepClone::deep_clone_in) by cloning every
/// field through the [`CloneContext`] (or derive it with
/// `#[derive(DeepClone)]`); callers use [`deep_clone`](DeepClone::deep_clone).
///
/// # Laws
///
/// - **Equality**: `value.deep_clone()? == value`
/// - **Independence**: no mutation of the clone is observable through `value`
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use frostpipe::object::DeepClone;
///
/// let shared = Rc::new(vec![1, 2, 3]);
/// let copy = shared.deep_clone().unwrap();
///
/// assert_eq!(copy, shared);
/// assert!(!Rc::ptr_eq(&copy, &shared));
/// ```
pub trait DeepClone: Sized {
    /// Returns a deep, independent copy of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::CyclicStructure`] when `self` contains a
    /// reference cycle.
    fn deep_clone(&self) -> Result<Self, ObjectError> {
        self.deep_clone_in(&mut CloneContext::new())
    }

    /// Clones `self` as part of a larger traversal.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::CyclicStructure`] when the traversal revisits a
    /// shared node it is still inside of.
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PathSegment {
    Field(String),
    Index(usize),
    Entry,
}

/// Traversal state threaded through one deep clone.
///
/// Tracks the field/index path from the root (for error messages), the
/// shared nodes currently being traversed (for cycle detection) and the
/// shared nodes already cloned (so each is copied once).
#[derive(Debug, Default)]
pub struct CloneContext {
    path: Vec<PathSegment>,
    ancestors: Vec<usize>,
    finished: HashMap<usize, Box<dyn Any>>,
}

impl CloneContext {
    /// Creates a context positioned at the root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clones the field `name` of the value being traversed.
    ///
    /// # Errors
    ///
    /// Propagates the field's clone error.
    pub fn field<T: DeepClone>(&mut self, name: &str, value: &T) -> Result<T, ObjectError> {
        self.scoped(PathSegment::Field(name.to_owned()), |context| {
            value.deep_clone_in(context)
        })
    }

    /// Clones the element at `index` of the value being traversed.
    ///
    /// # Errors
    ///
    /// Propagates the element's clone error.
    pub fn index<T: DeepClone>(&mut self, index: usize, value: &T) -> Result<T, ObjectError> {
        self.scoped(PathSegment::Index(index), |context| {
            value.deep_clone_in(context)
        })
    }

    /// Clones a map entry (key or value) of the value being traversed.
    ///
    /// # Errors
    ///
    /// Propagates the entry's clone error.
    pub fn entry<T: DeepClone>(&mut self, value: &T) -> Result<T, ObjectError> {
        self.scoped(PathSegment::Entry, |context| value.deep_clone_in(context))
    }

    /// Runs `body` while the shared node at `address` is marked as in progress.
    ///
    /// `address` identifies the node's allocation (e.g. `Rc::as_ptr(..).addr()`).
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::CyclicStructure`] if the node is already in
    /// progress; otherwise propagates `body`'s result.
    pub fn enter<R>(
        &mut self,
        address: usize,
        body: impl FnOnce(&mut Self) -> Result<R, ObjectError>,
    ) -> Result<R, ObjectError> {
        if self.ancestors.contains(&address) {
            let path = self.path();
            trace_event!(debug, path = %path, "rejected cyclic structure");
            return Err(ObjectError::CyclicStructure { path });
        }
        self.ancestors.push(address);
        let result = body(self);
        self.ancestors.pop();
        result
    }

    /// Clones the shared node at `address` once per traversal.
    ///
    /// The first visit runs `body` under [`enter`](Self::enter) and remembers
    /// the result; later visits return a handle to that same result, so
    /// sharing in the source is kept in the copy.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::CyclicStructure`] if the node is still in
    /// progress; otherwise propagates `body`'s result.
    pub fn shared<R: Clone + 'static>(
        &mut self,
        address: usize,
        body: impl FnOnce(&mut Self) -> Result<R, ObjectError>,
    ) -> Result<R, ObjectError> {
        if let Some(cloned) = self
            .finished
            .get(&address)
            .and_then(|cloned| cloned.downcast_ref::<R>())
        {
            return Ok(cloned.clone());
        }
        let cloned = self.enter(address, body)?;
        self.finished.insert(address, Box::new(cloned.clone()));
        Ok(cloned)
    }

    /// Renders the current position, e.g. `$.owner.pets[0]`.
    #[must_use]
    pub fn path(&self) -> String {
        let mut rendered = String::from("$");
        for segment in &self.path {
            match segment {
                PathSegment::Field(name) => {
                    rendered.push('.');
                    rendered.push_str(name);
                }
                PathSegment::Index(index) => rendered.push_str(&format!("[{index}]")),
                PathSegment::Entry => rendered.push_str("[]"),
            }
        }
        rendered
    }

    pub(crate) fn scoped<R>(
        &mut self,
        segment: PathSegment,
        body: impl FnOnce(&mut Self) -> Result<R, ObjectError>,
    ) -> Result<R, ObjectError> {
        self.path.push(segment);
        let result = body(self);
        self.path.pop();
        result
    }
}

// =============================================================================
// Scalars and date-like values
// =============================================================================

macro_rules! impl_deep_clone_by_copy {
    ($($type:ty),* $(,)?) => {
        $(
            impl DeepClone for $type {
                #[inline]
                fn deep_clone_in(&self, _context: &mut CloneContext) -> Result<Self, ObjectError> {
                    Ok(*self)
                }
            }
        )*
    };
}

impl_deep_clone_by_copy!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    &'static str, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
);

impl DeepClone for String {
    fn deep_clone_in(&self, _context: &mut CloneContext) -> Result<Self, ObjectError> {
        Ok(self.clone())
    }
}

impl<Tz: TimeZone> DeepClone for DateTime<Tz> {
    fn deep_clone_in(&self, _context: &mut CloneContext) -> Result<Self, ObjectError> {
        Ok(self.clone())
    }
}

impl<A, R> DeepClone for fn(A) -> R {
    fn deep_clone_in(&self, _context: &mut CloneContext) -> Result<Self, ObjectError> {
        Ok(*self)
    }
}

// =============================================================================
// Containers
// =============================================================================

impl<T: DeepClone> DeepClone for Option<T> {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        self.as_ref()
            .map(|value| value.deep_clone_in(context))
            .transpose()
    }
}

impl<T: DeepClone> DeepClone for Box<T> {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        (**self).deep_clone_in(context).map(Self::new)
    }
}

impl<T: DeepClone + 'static> DeepClone for Rc<T> {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        context.shared(Self::as_ptr(self).addr(), |context| {
            (**self).deep_clone_in(context).map(Self::new)
        })
    }
}

impl<T: DeepClone + 'static> DeepClone for Arc<T> {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        context.shared(Self::as_ptr(self).addr(), |context| {
            (**self).deep_clone_in(context).map(Self::new)
        })
    }
}

impl<T: DeepClone> DeepClone for Vec<T> {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        self.iter()
            .enumerate()
            .map(|(index, element)| context.index(index, element))
            .collect()
    }
}

impl<T: DeepClone> DeepClone for VecDeque<T> {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        self.iter()
            .enumerate()
            .map(|(index, element)| context.index(index, element))
            .collect()
    }
}

impl<K, V, S> DeepClone for HashMap<K, V, S>
where
    K: DeepClone + Eq + Hash,
    V: DeepClone,
    S: BuildHasher + Default,
{
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        self.iter()
            .map(|(key, value)| Ok((context.entry(key)?, context.entry(value)?)))
            .collect()
    }
}

impl<K, V> DeepClone for BTreeMap<K, V>
where
    K: DeepClone + Ord,
    V: DeepClone,
{
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        self.iter()
            .map(|(key, value)| Ok((context.entry(key)?, context.entry(value)?)))
            .collect()
    }
}

impl<T, S> DeepClone for HashSet<T, S>
where
    T: DeepClone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        self.iter().map(|element| context.entry(element)).collect()
    }
}

impl<T: DeepClone + Ord> DeepClone for BTreeSet<T> {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        self.iter().map(|element| context.entry(element)).collect()
    }
}

macro_rules! impl_deep_clone_for_tuple {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: DeepClone),+> DeepClone for ($($name,)+) {
                fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
                    Ok(($(context.index($index, &self.$index)?,)+))
                }
            }
        )*
    };
}

impl_deep_clone_for_tuple!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
);
