//! Function composition utilities.
//!
//! This module threads values through chains of unary functions, left to
//! right. It is the glue every other part of the crate is designed around:
//! collection transforms and the update engine all return closures that slot
//! directly into a pipeline.
//!
//! # Overview
//!
//! - [`pipe!`]: Apply functions to a value left-to-right
//! - [`try_pipe!`]: Same, for functions returning `Result`, stopping at the first error
//! - [`flow!`]: Build the left-to-right composition without applying it
//! - [`Pipe`]: Method-call style piping (`value.pipe(f)`)
//! - [`pipe_all`]: Thread a value through a runtime-length list of functions
//! - [`identity`]: The unit of composition
//!
//! # Examples
//!
//! ## Pipeline
//!
//! ```
//! use frostpipe::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! let result = pipe!(5, double, add_one);
//! assert_eq!(result, 11);
//! ```
//!
//! ## Reusable flow
//!
//! ```
//! use frostpipe::flow;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let double_then_increment = flow!(double, add_one);
//! assert_eq!(double_then_increment(5), 11);
//! ```
//!
//! # Laws
//!
//! - **Identity**: `pipe!(x) == x` and `pipe!(x, identity) == x`
//! - **Associativity**: `pipe!(pipe!(x, f), g) == pipe!(x, f, g)`
//! - **Flow consistency**: `flow!(f, g)(x) == pipe!(x, f, g)`

mod flow_macro;
mod pipe_macro;
mod try_pipe_macro;
mod utils;

pub use utils::{Pipe, identity, pipe_all};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::flow;
pub use crate::pipe;
pub use crate::try_pipe;
