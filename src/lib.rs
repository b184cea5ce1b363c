//! # frostpipe
//!
//! Left-to-right function pipelines, pure collection transforms, and
//! immutable updates for nested in-memory object graphs.
//!
//! ## Overview
//!
//! - **Function Composition**: `pipe!`, `try_pipe!`, `flow!` macros and the
//!   [`Pipe`](compose::Pipe) extension trait
//! - **Immutable Updates**: deep cloning, readonly views and copy-on-write
//!   updates over typed values and the dynamic [`Value`](object::Value) graph
//! - **Collection Transforms**: stateless sequence operations designed to be
//!   used as pipeline steps (`sort`, `filter`, `uniq`, `group_by`, ...)
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities
//! - `object`: Structural cloner, readonly projector and update engine
//! - `collection`: Collection transforms, shuffling and date conversion
//! - `derive`: `#[derive(DeepClone, Freeze)]`
//! - `serde`: Serialization for dynamic values
//! - `tracing`: Emit `tracing` events from the update engine
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use frostpipe::prelude::*;
//! use frostpipe::{pipe, record};
//!
//! let user = record! {
//!     "id" => 123,
//!     "name" => "John",
//!     "phone" => record! { "brand" => "Apple", "storage" => 512 },
//! };
//!
//! let upgraded = pipe!(
//!     &user,
//!     try_update(|mut user: Value| {
//!         user.set_path(&["phone", "storage"], 1024)?;
//!         Ok::<_, ObjectError>(user)
//!     })
//! )
//! .unwrap();
//!
//! assert_eq!(user.get_path(&["phone", "storage"]), Some(Value::from(512)));
//! assert_eq!(upgraded.get_path(&["phone", "storage"]), Some(Value::from(1024)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Lets the derive macros' `::frostpipe::...` paths resolve inside this crate.
#[cfg(feature = "derive")]
extern crate self as frostpipe;

#[macro_use]
mod trace;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use frostpipe::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "collection")]
pub mod collection;
