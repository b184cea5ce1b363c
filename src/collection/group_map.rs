//! Insertion-ordered grouping result.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A mapping from keys to the elements that produced them.
///
/// Produced by [`group_by`](super::group_by). Iteration yields groups in the
/// order their key first appeared; each group keeps its elements in insertion
/// order.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::GroupMap;
///
/// let groups: GroupMap<bool, i32> = [(true, 2), (false, 1), (true, 4)].into_iter().collect();
///
/// let rendered: Vec<(bool, Vec<i32>)> = groups.into_iter().collect();
/// assert_eq!(rendered, vec![(true, vec![2, 4]), (false, vec![1])]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct GroupMap<K: Eq + Hash, T> {
    groups: Vec<(K, Vec<T>)>,
    positions: HashMap<K, usize>,
}

impl<K: Eq + Hash, T> GroupMap<K, T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Returns the group for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.positions
            .get(key)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Returns `true` if some element produced `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.positions.contains_key(key)
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over the keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Iterates over `(key, group)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.groups
            .iter()
            .map(|(key, group)| (key, group.as_slice()))
    }
}

impl<K: Eq + Hash + Clone, T> GroupMap<K, T> {
    /// Appends `element` to the group for `key`, creating the group if needed.
    pub fn insert(&mut self, key: K, element: T) {
        if let Some(&position) = self.positions.get(&key) {
            self.groups[position].1.push(element);
        } else {
            self.positions.insert(key.clone(), self.groups.len());
            self.groups.push((key, vec![element]));
        }
    }
}

impl<K: Eq + Hash, T> Default for GroupMap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, T> FromIterator<(K, T)> for GroupMap<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut groups = Self::new();
        groups.extend(iter);
        groups
    }
}

impl<K: Eq + Hash + Clone, T> Extend<(K, T)> for GroupMap<K, T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, element) in iter {
            self.insert(key, element);
        }
    }
}

impl<K: Eq + Hash, T> IntoIterator for GroupMap<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::vec::IntoIter<(K, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<K: Eq + Hash + fmt::Debug, T: fmt::Debug> fmt::Debug for GroupMap<K, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}
