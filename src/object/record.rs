//! Keyed dynamic node.

use std::collections::BTreeMap;
use std::rc::Rc;

use super::node::SharedNode;
use super::{CloneContext, DeepClone, Freeze, ObjectError, Value, ValueKind};

/// A shared handle to a mutable map from field names to [`Value`]s.
///
/// Cloning a `Record` copies the handle, not the fields: both handles observe
/// each other's writes. Use [`DeepClone`] for an independent copy. Fields are
/// kept in key order.
///
/// Once sealed by [`freeze`](super::freeze), every write through every handle
/// fails with [`ObjectError::Frozen`].
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::{Record, Value};
///
/// let record = Record::from_entries([("name", Value::from("John"))]);
/// let alias = record.clone();
/// alias.set("age", 30).unwrap();
///
/// assert_eq!(record.get("age"), Some(Value::from(30)));
/// assert!(record.ptr_eq(&alias));
/// ```
#[derive(Clone, Default)]
pub struct Record {
    node: Rc<SharedNode<BTreeMap<String, Value>>>,
}

impl Record {
    /// Creates an empty, unsealed record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record from `(key, value)` pairs. Later duplicates win.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::from_map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    pub(crate) fn from_map(fields: BTreeMap<String, Value>) -> Self {
        Self {
            node: Rc::new(SharedNode::new(fields)),
        }
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node.read().len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node.read().is_empty()
    }

    /// Returns `true` if the record has a field named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.node.read().contains_key(key)
    }

    /// Returns the value of the field `key`.
    ///
    /// Records and sequences come back as aliases of the stored node.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.node.read().get(key).cloned()
    }

    /// Returns the field names in key order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.node.read().keys().cloned().collect()
    }

    /// Returns the field values in key order.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.node.read().values().cloned().collect()
    }

    /// Returns the fields as `(key, value)` pairs in key order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.node
            .read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Sets the field `key`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Frozen`] if the record is sealed.
    pub fn set(
        &self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ObjectError> {
        let (key, value) = (key.into(), value.into());
        self.node
            .write(ValueKind::Record, |fields| Ok(fields.insert(key, value)))
    }

    /// Removes the field `key`, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Frozen`] if the record is sealed.
    pub fn remove(&self, key: &str) -> Result<Option<Value>, ObjectError> {
        self.node
            .write(ValueKind::Record, |fields| Ok(fields.remove(key)))
    }

    /// Returns `true` once the record has been sealed by `freeze`.
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

    pub(crate) fn with_fields<R>(&self, body: impl FnOnce(&BTreeMap<String, Value>) -> R) -> R {
        body(&self.node.read())
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.node.read() == *other.node.read()
    }
}

impl DeepClone for Record {
    fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
        context.shared(self.address(), |context| {
            let fields = self.node.read();
            let mut cloned = BTreeMap::new();
            for (key, value) in fields.iter() {
                cloned.insert(key.clone(), context.field(key, value)?);
            }
            Ok(Self::from_map(cloned))
        })
    }
}

impl Freeze for Record {
    fn seal(&self) {
        if self.node.seal() {
            return;
        }
        self.node.read().values().for_each(Freeze::seal);
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_later_duplicate_key_wins() {
        let record = Record::from_entries([("a", Value::from(1)), ("a", Value::from(2))]);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("a"), Some(Value::from(2)));
    }

    #[rstest]
    fn test_remove_returns_previous_value() {
        let record = Record::from_entries([("a", Value::from(1))]);
        assert_eq!(record.remove("a"), Ok(Some(Value::from(1))));
        assert_eq!(record.remove("a"), Ok(None));
        assert!(record.is_empty());
    }

    #[rstest]
    fn test_sealed_record_rejects_remove() {
        let record = Record::from_entries([("a", Value::from(1))]);
        record.seal();
        assert!(record.is_sealed());
        assert_eq!(
            record.remove("a"),
            Err(ObjectError::Frozen {
                kind: ValueKind::Record
            })
        );
        assert!(record.contains_key("a"));
    }

    #[rstest]
    fn test_deep_clone_allocates_new_node() {
        let record = Record::from_entries([("a", Value::from(1))]);
        let copy = record.deep_clone().unwrap();
        assert_eq!(copy, record);
        assert!(!copy.ptr_eq(&record));
    }
}
