//! Uniform random permutations.

use rand::Rng;

/// Returns a uniformly shuffled copy, drawing from the thread-local generator.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::{shuffle, sort};
/// use frostpipe::pipe;
///
/// let deck: Vec<u32> = (1..=52).collect();
/// let shuffled = shuffle()(&deck);
///
/// assert_eq!(pipe!(&shuffled, sort()), deck);
/// ```
pub fn shuffle<T, S>() -> impl Fn(S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    |collection: S| fisher_yates(collection.as_ref(), &mut rand::rng())
}

/// Returns a shuffled copy, drawing from `rng`.
///
/// With a seeded generator the permutation is reproducible.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let first = shuffle_with(StdRng::seed_from_u64(7))([1, 2, 3, 4, 5]);
/// let second = shuffle_with(StdRng::seed_from_u64(7))([1, 2, 3, 4, 5]);
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, S, R>(mut rng: R) -> impl FnMut(S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    R: Rng,
{
    move |collection: S| fisher_yates(collection.as_ref(), &mut rng)
}

fn fisher_yates<T: Clone, R: Rng + ?Sized>(elements: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = elements.to_vec();
    for index in (1..shuffled.len()).rev() {
        let other = rng.random_range(0..=index);
        shuffled.swap(index, other);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    #[case(vec![])]
    #[case(vec![42])]
    fn test_trivial_inputs_are_unchanged(#[case] input: Vec<i32>) {
        assert_eq!(shuffle()(&input), input);
    }

    #[rstest]
    fn test_shuffle_with_is_a_permutation() {
        let input: Vec<i32> = (0..20).collect();
        let mut shuffled = shuffle_with(StdRng::seed_from_u64(11))(&input);
        assert_ne!(shuffled, input);
        shuffled.sort_unstable();
        assert_eq!(shuffled, input);
    }
}
