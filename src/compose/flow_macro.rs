//! The `flow!` macro for building left-to-right compositions.

/// Composes functions from left to right into a single function.
///
/// `flow!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, i.e. `pipe!(x, f, g, h)`.
///
/// Where [`pipe!`](crate::pipe!) applies a chain immediately, `flow!` returns
/// the chain as a value so it can be stored, passed around, or used as a step
/// inside another pipeline.
///
/// # Laws
///
/// - **Associativity**: `flow!(flow!(f, g), h) == flow!(f, flow!(g, h))`
/// - **Identity**: `flow!(identity, f) == f == flow!(f, identity)`
///
/// # Syntax
///
/// - `flow!(f)` - Returns `f` unchanged
/// - `flow!(f, g)` - Returns `move |x| g(f(x))`
/// - `flow!(f, g, h, ...)` - Chains any number of functions
///
/// # Type Requirements
///
/// All functions must implement [`Fn`] so the composed function can be called
/// more than once.
///
/// # Examples
///
/// ```
/// use frostpipe::flow;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digit_count = flow!(to_string, get_length);
/// assert_eq!(digit_count(12345), 5);
/// assert_eq!(digit_count(7), 1);
/// ```
///
/// ## As a pipeline step
///
/// ```
/// use frostpipe::{flow, pipe};
///
/// let normalize = flow!(|s: &str| s.trim().to_string(), |s: String| s.to_lowercase());
/// let result = pipe!("  Hello  ", normalize, |s: String| s + "!");
/// assert_eq!(result, "hello!");
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::flow!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}
