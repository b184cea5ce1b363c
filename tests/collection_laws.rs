//! Property-based tests for the collection transforms.
//!
//! ## Shuffle
//! - **Permutation**: `sort(shuffle(xs)) == sort(xs)`
//! - **Reproducible**: equal seeds give equal permutations
//!
//! ## Ordering
//! - **Sorted**: `sort(xs)` is non-decreasing and a permutation of `xs`
//! - **Idempotent**: `sort(sort(xs)) == sort(xs)`
//!
//! ## Selection
//! - **Uniq**: `uniq(k)(xs)` has no repeated keys and keeps the first of each
//! - **Chunk/Flatten**: `flatten(chunk(n)(xs)) == xs` for `n > 0`
//! - **Take/Skip**: `take(n)(xs) ++ skip(n)(xs) == xs`
//! - **Purity**: the input collection is never modified

#![cfg(all(feature = "collection", feature = "compose"))]

use std::collections::HashSet;

use frostpipe::collection::{
    chunk, flatten, group_by, shuffle, shuffle_with, skip, sort, split, take, uniq,
};
use frostpipe::pipe;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// =============================================================================
// Shuffle Laws
// =============================================================================

proptest! {
    /// Permutation Law: sort(shuffle(xs)) == sort(xs)
    #[test]
    fn prop_shuffle_is_permutation(values in prop::collection::vec(any::<i16>(), 0..64)) {
        let snapshot = values.clone();
        let shuffled = pipe!(&values, shuffle());

        prop_assert_eq!(pipe!(&shuffled, sort()), pipe!(&values, sort()));
        prop_assert_eq!(values, snapshot);
    }

    /// Reproducible Law: equal seeds give equal permutations
    #[test]
    fn prop_shuffle_with_seed_is_reproducible(
        values in prop::collection::vec(any::<i16>(), 0..64),
        seed in any::<u64>(),
    ) {
        let first = shuffle_with(StdRng::seed_from_u64(seed))(&values);
        let second = shuffle_with(StdRng::seed_from_u64(seed))(&values);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_shuffle_of_ten_elements_eventually_reorders() {
    let deck: Vec<u32> = (0..10).collect();
    let reordered = (0..20).any(|_| pipe!(&deck, shuffle()) != deck);
    assert!(reordered);
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    /// Sorted Law: every adjacent pair is ordered
    #[test]
    fn prop_sort_is_non_decreasing(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let sorted = pipe!(&values, sort());
        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    /// Idempotence Law: sort(sort(xs)) == sort(xs)
    #[test]
    fn prop_sort_is_idempotent(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let once = pipe!(&values, sort());
        prop_assert_eq!(pipe!(&once, sort()), once);
    }
}

// =============================================================================
// Selection Laws
// =============================================================================

proptest! {
    /// Uniq Law: no repeated keys, first occurrence wins
    #[test]
    fn prop_uniq_keeps_first_of_each_key(values in prop::collection::vec(0_u8..16, 0..64)) {
        let unique = pipe!(&values, uniq(|value: &u8| *value));

        let distinct: HashSet<u8> = unique.iter().copied().collect();
        prop_assert_eq!(distinct.len(), unique.len());

        let mut seen = HashSet::new();
        let expected: Vec<u8> = values.iter().copied().filter(|value| seen.insert(*value)).collect();
        prop_assert_eq!(unique, expected);
    }

    /// Chunk/Flatten Law: flatten(chunk(n)(xs)) == xs
    #[test]
    fn prop_chunk_then_flatten_is_identity(
        values in prop::collection::vec(any::<i32>(), 0..64),
        size in 1_usize..10,
    ) {
        let chunks = pipe!(&values, chunk(size));
        prop_assert!(chunks.iter().all(|piece| !piece.is_empty() && piece.len() <= size));
        prop_assert_eq!(pipe!(&chunks, flatten()), values);
    }

    /// Take/Skip Law: take(n)(xs) ++ skip(n)(xs) == xs
    #[test]
    fn prop_take_and_skip_partition(
        values in prop::collection::vec(any::<i32>(), 0..64),
        count in 0_usize..80,
    ) {
        let mut rejoined = pipe!(&values, take(count));
        rejoined.extend(pipe!(&values, skip(count)));
        prop_assert_eq!(rejoined, values);
    }

    /// Group Law: groups partition the input and keep element order
    #[test]
    fn prop_group_by_partitions_input(values in prop::collection::vec(0_u8..32, 0..64)) {
        let groups = pipe!(&values, group_by(|value: &u8| value % 4));

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        prop_assert_eq!(total, values.len());
        for (key, members) in groups.iter() {
            let expected: Vec<u8> = values.iter().copied().filter(|value| value % 4 == *key).collect();
            prop_assert_eq!(members, expected.as_slice());
        }
    }

    /// Split Law: splitting and joining with the same separator is lossless
    #[test]
    fn prop_split_then_join_is_identity(text in "[a-c,]{0,24}") {
        let parts = pipe!(text.as_str(), split(","));
        prop_assert_eq!(parts.join(","), text);
    }
}
