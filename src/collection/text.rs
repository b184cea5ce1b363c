//! Text transforms.

/// Splits text on every occurrence of `separator`.
///
/// Empty pieces are kept, so splitting `"a,,b"` on `","` yields three parts.
/// An empty separator splits into single characters.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::split;
/// use frostpipe::pipe;
///
/// assert_eq!(pipe!("a,b,c", split(",")), vec!["a", "b", "c"]);
/// ```
pub fn split<S>(separator: &str) -> impl Fn(S) -> Vec<String> + use<S>
where
    S: AsRef<str>,
{
    let separator = separator.to_owned();
    move |text: S| {
        let text = text.as_ref();
        if separator.is_empty() {
            return text.chars().map(String::from).collect();
        }
        text.split(separator.as_str()).map(str::to_owned).collect()
    }
}
