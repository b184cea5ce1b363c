//! Immutable updates for nested in-memory values.
//!
//! This module provides three cooperating pieces:
//!
//! - [`DeepClone`]: the structural cloner. Produces independent copies and
//!   rejects cyclic graphs with [`ObjectError::CyclicStructure`].
//! - [`freeze`] / [`defrost`]: the readonly projector. [`Frozen<T>`] offers
//!   no mutable access, and sealed [`Value`] nodes reject writes at runtime.
//! - [`update`] / [`try_update`] / [`clone`]: the update engine. Mutators
//!   work on a fresh deep clone and the result is always frozen.
//!
//! Typed Rust data works out of the box (and user types can
//! `#[derive(DeepClone, Freeze)]`); data whose shape is only known at runtime
//! uses the dynamic [`Value`] graph built with [`record!`](crate::record) and
//! [`sequence!`](crate::sequence).
//!
//! # Examples
//!
//! ```rust
//! use frostpipe::object::{ObjectError, Value, clone, try_update};
//! use frostpipe::{pipe, record};
//!
//! let user = record! {
//!     "name" => "John",
//!     "phone" => record! { "brand" => "Apple", "storage" => 512 },
//! };
//!
//! let snapshot = clone(&user).unwrap();
//! let upgraded = pipe!(
//!     &user,
//!     try_update(|mut user: Value| {
//!         user.set_path(&["phone", "storage"], 1024)?;
//!         Ok::<_, ObjectError>(user)
//!     })
//! )
//! .unwrap();
//!
//! assert_eq!(user, *snapshot);
//! assert_eq!(upgraded.get_path(&["phone", "storage"]), Some(Value::from(1024)));
//! ```

mod deep_clone;
mod error;
mod freeze;
mod function;
mod node;
mod record;
mod sequence;
mod update;
mod value;
mod value_macro;

#[cfg(feature = "serde")]
mod serde;

pub use deep_clone::{CloneContext, DeepClone};
pub use error::ObjectError;
pub use freeze::{Freeze, Frozen, defrost, freeze};
pub use function::Function;
pub use record::Record;
pub use sequence::Sequence;
pub use update::{clone, try_update, update};
pub use value::{Value, ValueKind};

#[cfg(feature = "derive")]
pub use frostpipe_derive::{DeepClone, Freeze};
