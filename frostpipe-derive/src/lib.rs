//! Derive macros for frostpipe's structural cloner and readonly projector.
//!
//! # Available Derive Macros
//!
//! - [`DeepClone`]: Generates a field-by-field `DeepClone` implementation
//! - [`Freeze`]: Generates a field-by-field `Freeze` implementation
//!
//! Both derives support named structs, tuple structs, unit structs and enums,
//! including generic types (each type parameter receives the matching bound).
//!
//! # Example
//!
//! ```rust,ignore
//! use frostpipe::object::{update, DeepClone};
//! use frostpipe_derive::{DeepClone, Freeze};
//!
//! #[derive(Debug, PartialEq, DeepClone, Freeze)]
//! struct Phone {
//!     brand: String,
//!     storage: u32,
//! }
//!
//! #[derive(Debug, PartialEq, DeepClone, Freeze)]
//! struct User {
//!     id: u64,
//!     name: String,
//!     phone: Phone,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "John".to_string(),
//!     phone: Phone { brand: "Apple".to_string(), storage: 512 },
//! };
//! let upgraded = update(|mut user: User| {
//!     user.phone.storage = 1024;
//!     user
//! })(&user)
//! .unwrap();
//!
//! assert_eq!(user.phone.storage, 512);
//! assert_eq!(upgraded.phone.storage, 1024);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod deep_clone;
mod freeze;

use proc_macro::TokenStream;

/// Derive macro for `frostpipe::object::DeepClone`.
///
/// Every field is cloned through the traversal context, so cycle detection and
/// error paths cover derived types exactly like built-in containers. Named
/// fields contribute `.field` path segments, positional fields `[index]`.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl DeepClone for User {
///     fn deep_clone_in(&self, context: &mut CloneContext) -> Result<Self, ObjectError> {
///         Ok(Self {
///             id: context.field("id", &self.id)?,
///             phone: context.field("phone", &self.phone)?,
///         })
///     }
/// }
/// ```
///
/// # Generics
///
/// Each type parameter `T` gets a `T: DeepClone` bound on the generated impl.
#[proc_macro_derive(DeepClone)]
pub fn derive_deep_clone(input: TokenStream) -> TokenStream {
    deep_clone::derive_deep_clone_impl(input)
}

/// Derive macro for `frostpipe::object::Freeze`.
///
/// The generated `seal` visits every field, so dynamic values nested anywhere
/// inside the type are sealed when the outer value is frozen.
///
/// Fields whose types have unchecked interior mutability (`Cell`, `RefCell`)
/// do not implement `Freeze`, so deriving it for such a type fails to compile.
#[proc_macro_derive(Freeze)]
pub fn derive_freeze(input: TokenStream) -> TokenStream {
    freeze::derive_freeze_impl(input)
}
