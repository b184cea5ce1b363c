//! Ordered dynamic node.

use std::rc::Rc;

use super::node::SharedNode;
use super::{CloneContext, DeepClone, Freeze, ObjectError, Value, ValueKind};

/// A shared handle to a mutable, ordered list of [`Value`]s.
///
/// Like [`Record`](super::Record), cloning a `Sequence` copies the handle;
/// writes through one handle are visible through every other, and a sealed
/// sequence rejects writes from all of them.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::{Sequence, Value};
///
/// let tags: Sequence = ["new", "sale"].into_iter().map(Value::from).collect();
/// tags.push("clearance").unwrap();
///
/// assert_eq!(tags.len(), 3);
/// assert_eq!(tags.get(2), Some(Value::from("clearance")));
/// ```
#[derive(Clone, Default)]
pub struct Sequence {
    node: Rc<SharedNode<Vec<Value>>>,
}

impl Sequence {
    /// Creates an empty, unsealed sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence holding `values`.
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            node: Rc::new(SharedNode::new(values)),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node.read().len()
    }

    /// Returns `true` if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node.read().is_empty()
    }

    /// Returns the element at `index`, aliasing nested nodes.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.node.read().get(index).cloned()
    }

    /// Returns the elements as a new vector of handles.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.node.read().clone()
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Frozen`] if the sequence is sealed.
    pub fn push(&self, value: impl Into<Value>) -> Result<(), ObjectError> {
        let value = value.into();
        self.node.write(ValueKind::Sequence, |values| {
            values.push(value);
            Ok(())
        })
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Frozen`] if the sequence is sealed, or
    /// [`ObjectError::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<Value, ObjectError> {
        let value = value.into();
        self.node.write(ValueKind::Sequence, |values| {
            let length = values.len();
            values
                .get_mut(index)
                .map(|slot| std::mem::replace(slot, value))
                .ok_or(ObjectError::IndexOutOfBounds { index, length })
        })
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Frozen`] if the sequence is sealed, or
    /// [`ObjectError::IndexOutOfBounds`] if `index >= len`.
    pub fn remove(&self, index: usize) -> Result<Value, ObjectError> {
        self.node.write(ValueKind::Sequence, |values| {
            if index < values.len() {
                Ok(values.remove(index))
            } else {
                Err(ObjectError::IndexOutOfBounds {
                    index,
                    length: values.len(),
                })
            }
        })
    }

    /// Returns `true` once the sequence has been sealed by `freeze`.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.node.is_sealed()
    }

    /// Returns `true` if both handles point to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.node).addr()
    }

    pub(crate) fn with_values<R>(&self, body: impl FnOnce(&[Value]) -> R) -> R {
        body(&self.node.read())
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.node.read() == *other.node.read()
    }
}

impl DeepClone for Sequence {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        context.shared(self.address(), |context| {
            let values = self.node.read();
            values
                .iter()
                .enumerate()
                .map(|(index, value)| context.index(index, value))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::from_values)
        })
    }
}

impl Freeze for Sequence {
    fn seal(&self) {
        if self.node.seal() {
            return;
        }
        self.node.read().iter().for_each(Freeze::seal);
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}
