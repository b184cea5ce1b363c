//! Transforms over ordered sequences.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use super::GroupMap;

// =============================================================================
// Ordering
// =============================================================================

/// Returns a sorted copy in ascending order. The sort is stable.
///
/// Elements are compared with their `Ord` implementation, so numbers sort
/// numerically (`[10, 9]` becomes `[9, 10]`). To order by rendered text
/// instead, use [`sort_by_key`] with `ToString::to_string`.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::sort;
///
/// let names = ["carol", "alice", "bob"];
/// assert_eq!(sort()(names), vec!["alice", "bob", "carol"]);
/// ```
pub fn sort<T, S>() -> impl Fn(S) -> Vec<T>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    |collection: S| {
        let mut sorted = collection.as_ref().to_vec();
        sorted.sort();
        sorted
    }
}

/// Returns a copy sorted with `compare`. The sort is stable.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::sort_by;
///
/// let descending = sort_by(|left: &i32, right: &i32| right.cmp(left));
/// assert_eq!(descending(vec![1, 3, 2]), vec![3, 2, 1]);
/// ```
pub fn sort_by<T, S, F>(compare: F) -> impl Fn(S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    F: Fn(&T, &T) -> Ordering,
{
    move |collection: S| {
        let mut sorted = collection.as_ref().to_vec();
        sorted.sort_by(&compare);
        sorted
    }
}

/// Returns a copy sorted by the key `key` extracts. The sort is stable.
pub fn sort_by_key<T, S, K, F>(key: F) -> impl Fn(S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    K: Ord,
    F: Fn(&T) -> K,
{
    move |collection: S| {
        let mut sorted = collection.as_ref().to_vec();
        sorted.sort_by_key(&key);
        sorted
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Keeps the elements for which `predicate` holds.
pub fn filter<T, S, P>(predicate: P) -> impl Fn(S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    P: Fn(&T) -> bool,
{
    move |collection: S| {
        collection
            .as_ref()
            .iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }
}

/// Applies `transform` to every element.
pub fn map<T, U, S, F>(transform: F) -> impl Fn(S) -> Vec<U>
where
    S: AsRef<[T]>,
    F: Fn(&T) -> U,
{
    move |collection: S| collection.as_ref().iter().map(&transform).collect()
}

/// Applies `transform` to every element and its index.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::map_indexed;
///
/// let storage = [128, 256];
/// let upgraded = map_indexed(|size: &i32, index| if index == 0 { 1024 } else { *size })(storage);
/// assert_eq!(upgraded, vec![1024, 256]);
/// ```
pub fn map_indexed<T, U, S, F>(transform: F) -> impl Fn(S) -> Vec<U>
where
    S: AsRef<[T]>,
    F: Fn(&T, usize) -> U,
{
    move |collection: S| {
        collection
            .as_ref()
            .iter()
            .enumerate()
            .map(|(index, element)| transform(element, index))
            .collect()
    }
}

/// Calls `callback` with every element and its index, in order.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::for_each;
///
/// let mut seen = Vec::new();
/// for_each(|name: &&str, index| seen.push(format!("{index}:{name}")))(["a", "b"]);
/// assert_eq!(seen, vec!["0:a", "1:b"]);
/// ```
pub fn for_each<T, S, F>(mut callback: F) -> impl FnMut(S)
where
    S: AsRef<[T]>,
    F: FnMut(&T, usize),
{
    move |collection: S| {
        for (index, element) in collection.as_ref().iter().enumerate() {
            callback(element, index);
        }
    }
}

/// Keeps the first `count` elements (all of them if there are fewer).
pub fn take<T, S>(count: usize) -> impl Fn(S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    move |collection: S| collection.as_ref().iter().take(count).cloned().collect()
}

/// Drops the first `count` elements.
pub fn skip<T, S>(count: usize) -> impl Fn(S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    move |collection: S| collection.as_ref().iter().skip(count).cloned().collect()
}

/// Keeps the values of the `Some` elements, dropping every `None`.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::compact;
///
/// assert_eq!(compact()([Some("a"), None, Some("b"), None]), vec!["a", "b"]);
/// ```
pub fn compact<T, S>() -> impl Fn(S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[Option<T>]>,
{
    |collection: S| collection.as_ref().iter().flatten().cloned().collect()
}

/// Keeps the first element for every distinct key, in original order.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::uniq;
///
/// let people = vec![(1, 'a'), (1, 'b'), (2, 'c')];
/// assert_eq!(uniq(|person: &(i32, char)| person.0)(&people), vec![(1, 'a'), (2, 'c')]);
/// assert_eq!(people.len(), 3);
/// ```
pub fn uniq<T, S, K, F>(key: F) -> impl Fn(S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    move |collection: S| {
        let mut seen = HashSet::new();
        collection
            .as_ref()
            .iter()
            .filter(|element| seen.insert(key(element)))
            .cloned()
            .collect()
    }
}

/// Returns the first element for which `predicate` holds.
pub fn find<T, S, P>(predicate: P) -> impl Fn(S) -> Option<T>
where
    T: Clone,
    S: AsRef<[T]>,
    P: Fn(&T) -> bool,
{
    move |collection: S| {
        collection
            .as_ref()
            .iter()
            .find(|element| predicate(element))
            .cloned()
    }
}

/// Returns the first element.
pub fn first<T, S>() -> impl Fn(S) -> Option<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    |collection: S| collection.as_ref().first().cloned()
}

/// Returns the last element.
pub fn last<T, S>() -> impl Fn(S) -> Option<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    |collection: S| collection.as_ref().last().cloned()
}

// =============================================================================
// Reshaping
// =============================================================================

/// Splits into consecutive runs of `size` elements. The last run may be
/// shorter. A `size` of zero yields no runs.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::chunk;
///
/// assert_eq!(chunk(2)([1, 2, 3, 4, 5]), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(0)([1, 2, 3]).is_empty());
/// ```
pub fn chunk<T, S>(size: usize) -> impl Fn(S) -> Vec<Vec<T>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    move |collection: S| {
        if size == 0 {
            return Vec::new();
        }
        collection.as_ref().chunks(size).map(<[T]>::to_vec).collect()
    }
}

/// Concatenates nested sequences one level deep.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::{chunk, flatten};
/// use frostpipe::pipe;
///
/// let numbers = vec![1, 2, 3, 4, 5];
/// assert_eq!(pipe!(&numbers, chunk(2), flatten()), numbers);
/// ```
pub fn flatten<T, I, S>() -> impl Fn(S) -> Vec<T>
where
    T: Clone,
    I: AsRef<[T]>,
    S: AsRef<[I]>,
{
    |collection: S| {
        collection
            .as_ref()
            .iter()
            .flat_map(|inner| inner.as_ref().iter().cloned())
            .collect()
    }
}

/// Renders every element with `Display` and joins them with `separator`
/// (`","` when `None`).
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::join;
///
/// assert_eq!(join(None)([1, 2, 3]), "1,2,3");
/// assert_eq!(join(Some(" / "))(["a", "b"]), "a / b");
/// ```
pub fn join<T, S>(separator: Option<&str>) -> impl Fn(S) -> String + use<T, S>
where
    T: Display,
    S: AsRef<[T]>,
{
    let separator = separator.unwrap_or(",").to_owned();
    move |collection: S| {
        let mut joined = String::new();
        for (index, element) in collection.as_ref().iter().enumerate() {
            if index > 0 {
                joined.push_str(&separator);
            }
            joined.push_str(&element.to_string());
        }
        joined
    }
}

/// Groups elements by key.
///
/// Groups appear in the order their key is first seen, and each group keeps
/// its elements in original relative order.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::group_by;
///
/// let people = vec![(1, 'a'), (1, 'b'), (2, 'c')];
/// let groups = group_by(|person: &(i32, char)| person.0)(&people);
///
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(groups.get(&1), Some(&[(1, 'a'), (1, 'b')][..]));
/// assert_eq!(groups.get(&2), Some(&[(2, 'c')][..]));
/// ```
pub fn group_by<T, S, K, F>(key: F) -> impl Fn(S) -> GroupMap<K, T>
where
    T: Clone,
    S: AsRef<[T]>,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    move |collection: S| {
        collection
            .as_ref()
            .iter()
            .map(|element| (key(element), element.clone()))
            .collect()
    }
}
