//! Pure collection transforms.
//!
//! Every transform in this module is a factory: it takes its configuration
//! (a predicate, a count, a separator...) and returns a closure that accepts
//! the collection. That shape makes each transform a ready-made step for
//! [`pipe!`](crate::pipe!):
//!
//! ```rust
//! use frostpipe::collection::{filter, map, sort, take};
//! use frostpipe::pipe;
//!
//! let scores = vec![7, 3, 9, 1, 5];
//! let top = pipe!(&scores, filter(|score: &i32| *score > 2), sort(), take(2), map(|score: &i32| score * 10));
//!
//! assert_eq!(top, vec![30, 50]);
//! assert_eq!(scores, vec![7, 3, 9, 1, 5]);
//! ```
//!
//! Sequence transforms accept anything that is `AsRef<[T]>` (`Vec<T>`,
//! `&Vec<T>`, slices, arrays) and never mutate their input: results are new
//! vectors holding clones of the selected elements.
//!
//! # Overview
//!
//! | Transform                  | Result              |
//! |----------------------------|---------------------|
//! | [`sort`], [`sort_by`], [`sort_by_key`] | `Vec<T>` (stable) |
//! | [`filter`], [`take`], [`skip`], [`compact`], [`uniq`] | `Vec<T>` |
//! | [`map`]                    | `Vec<U>`            |
//! | [`map_indexed`]            | `Vec<U>`            |
//! | [`chunk`]                  | `Vec<Vec<T>>`       |
//! | [`flatten`]                | `Vec<T>`            |
//! | [`join`]                   | `String`            |
//! | [`group_by`]               | [`GroupMap<K, T>`]  |
//! | [`find`], [`first`], [`last`] | `Option<T>`      |
//! | [`for_each`]               | `()`                |
//! | [`shuffle`], [`shuffle_with`] | `Vec<T>` (permutation) |
//! | [`split`]                  | `Vec<String>`       |
//!
//! [`to_date`] and [`to_unix_time`] convert between epoch milliseconds and
//! `chrono` timestamps and are steps themselves.

mod date;
mod group_map;
mod sequence;
mod shuffle;
mod text;

pub use date::{DateError, to_date, to_unix_time};
pub use group_map::GroupMap;
pub use sequence::{
    chunk, compact, filter, find, first, flatten, for_each, group_by, join, last, map, map_indexed,
    skip, sort, sort_by, sort_by_key, take, uniq,
};
pub use shuffle::{shuffle, shuffle_with};
pub use text::split;
