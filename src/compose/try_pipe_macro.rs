//! The `try_pipe!` macro for fallible left-to-right pipelines.

/// Pipes a value through functions that return `Result`, stopping at the
/// first error.
///
/// `try_pipe!(x, f, g, h)` is equivalent to `f(x).and_then(g).and_then(h)`.
///
/// The first `Err` is returned exactly as the failing step produced it and no
/// later step runs. All steps must share the same error type.
///
/// # Syntax
///
/// - `try_pipe!(x, f)` - Returns `f(x)`
/// - `try_pipe!(x, f, g, ...)` - Returns `f(x).and_then(g).and_then(...)`
///
/// # Examples
///
/// ```
/// use frostpipe::try_pipe;
///
/// fn parse(text: &str) -> Result<i32, String> {
///     text.parse().map_err(|_| format!("not a number: {text}"))
/// }
/// fn halve(value: i32) -> Result<i32, String> {
///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("odd: {value}")) }
/// }
///
/// assert_eq!(try_pipe!("84", parse, halve, halve), Ok(21));
/// assert_eq!(try_pipe!("42", parse, halve, halve), Err("odd: 21".to_string()));
/// assert_eq!(try_pipe!("x", parse, halve), Err("not a number: x".to_string()));
/// ```
///
/// ## Mixing with updates
///
/// ```
/// use frostpipe::try_pipe;
/// use frostpipe::object::{Value, defrost, update};
/// use frostpipe::record;
///
/// let counter = record! { "count" => 1 };
/// let bumped = try_pipe!(
///     &counter,
///     update(|mut counter: Value| {
///         counter.set("count", 2).ok();
///         counter
///     }),
///     |frozen| Ok(defrost(frozen))
/// )
/// .unwrap();
///
/// assert_eq!(bumped.get("count"), Some(Value::from(2)));
/// ```
#[macro_export]
macro_rules! try_pipe {
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $function($value)$(.and_then($remaining_functions))+
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    #[test]
    fn test_try_pipe_single() {
        let checked = |x: i32| x.checked_mul(2).ok_or("overflow");
        assert_eq!(try_pipe!(21, checked), Ok(42));
    }

    #[test]
    fn test_try_pipe_short_circuits() {
        let calls = Cell::new(0);
        let fail = |_: i32| -> Result<i32, &'static str> { Err("first failure") };
        let count = |x: i32| -> Result<i32, &'static str> {
            calls.set(calls.get() + 1);
            Ok(x)
        };

        let result = try_pipe!(1, fail, count, count);

        assert_eq!(result, Err("first failure"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_try_pipe_all_succeed() {
        let add_one = |x: i32| -> Result<i32, String> { Ok(x + 1) };
        let double = |x: i32| -> Result<i32, String> { Ok(x * 2) };
        assert_eq!(try_pipe!(3, add_one, double, add_one), Ok(9));
    }
}
