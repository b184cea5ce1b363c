//! Feature-gated `tracing` emission.
//!
//! `trace_event!(level, ...)` forwards to the matching `tracing` macro when the
//! `tracing` feature is enabled and expands to nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($argument:tt)+) => {
        ::tracing::$level!($($argument)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($argument:tt)+) => {};
}
