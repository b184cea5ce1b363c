//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// The value flows through the transformations in the order they are
/// written. Each function's input type must match the previous function's
/// output type; mismatches are compile errors.
///
/// The macro adds no behavior of its own: nothing is caught, and a panic in
/// any step propagates before later steps run. Use [`try_pipe!`](crate::try_pipe!)
/// for steps that return `Result`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once.
///
/// # Examples
///
/// ## Type conversion through pipeline
///
/// ```
/// use frostpipe::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let result = pipe!(12345, to_string, get_length);
/// assert_eq!(result, 5);
/// ```
///
/// ## Collection transforms as steps
///
/// ```
/// use frostpipe::pipe;
/// use frostpipe::collection::{filter, sort, take};
///
/// let scores = vec![7, 3, 9, 1, 8];
/// let top = pipe!(&scores, filter(|score: &i32| *score > 2), sort(), take(2));
///
/// assert_eq!(top, vec![3, 7]);
/// assert_eq!(scores, vec![7, 3, 9, 1, 8]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
