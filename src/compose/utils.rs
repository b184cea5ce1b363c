//! Helper functions for left-to-right composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`Pipe`]: Method-call style application
//! - [`pipe_all`]: Runtime-length, homogeneous pipelines

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// - `pipe!(x, identity) == x`
/// - `flow!(identity, f)` behaves like `f`
///
/// # Examples
///
/// ```
/// use frostpipe::compose::identity;
/// use frostpipe::pipe;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(pipe!(vec![1, 2, 3], identity), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Method-call style function application.
///
/// `value.pipe(f).pipe(g)` is `pipe!(value, f, g)` written as a method chain.
/// Implemented for every sized type.
///
/// # Examples
///
/// ```
/// use frostpipe::compose::Pipe;
///
/// let length = 12345.pipe(|x: i32| x.to_string()).pipe(|s: String| s.len());
/// assert_eq!(length, 5);
/// ```
pub trait Pipe: Sized {
    /// Applies `function` to `self`.
    #[inline]
    fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }
}

impl<T> Pipe for T {}

/// Threads `value` through every function in `functions`, in order.
///
/// This is the runtime counterpart of [`pipe!`](crate::pipe!) for chains
/// whose length is only known at runtime. All steps share one type. An empty
/// list returns `value` unchanged.
///
/// # Examples
///
/// ```
/// use frostpipe::compose::pipe_all;
///
/// let steps: Vec<Box<dyn Fn(i32) -> i32>> = vec![
///     Box::new(|x: i32| x + 1),
///     Box::new(|x: i32| x * 10),
/// ];
/// assert_eq!(pipe_all(4, steps), 50);
/// assert_eq!(pipe_all(4, Vec::<fn(i32) -> i32>::new()), 4);
/// ```
pub fn pipe_all<T, I, F>(value: T, functions: I) -> T
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> T,
{
    functions
        .into_iter()
        .fold(value, |accumulator, function| function(accumulator))
}
