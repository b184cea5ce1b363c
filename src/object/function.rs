//! Function values inside a dynamic graph.

use std::fmt;
use std::rc::Rc;

use super::{CloneContext, DeepClone, Freeze, ObjectError, Value};

/// A callable stored in a [`Value`].
///
/// Functions are opaque to the library: deep clones share them, `freeze`
/// leaves them alone, and two functions are equal only if they are the same
/// allocation.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::{Function, Value};
///
/// let double = Function::new(|value: &Value| Value::from(value.as_i64().unwrap_or(0) * 2));
/// assert_eq!(double.call(&Value::from(21)), Value::from(42));
/// ```
#[derive(Clone)]
pub struct Function(Rc<dyn Fn(&Value) -> Value>);

impl Function {
    /// Wraps `function`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&Value) -> Value + 'static,
    {
        Self(Rc::new(function))
    }

    /// Calls the function with `argument`.
    #[must_use]
    pub fn call(&self, argument: &Value) -> Value {
        (self.0)(argument)
    }

    /// Returns `true` if both handles refer to the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[Function]")
    }
}

impl DeepClone for Function {
    fn deep_clone_in(&self, _context: &mut CloneContext) -> Result<Self, ObjectError> {
        Ok(self.clone())
    }
}

impl Freeze for Function {
    #[inline]
    fn seal(&self) {}
}
