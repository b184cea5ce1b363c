//! Error types for the immutable-update subsystem.

use super::ValueKind;

/// Represents errors that can occur while cloning, freezing or editing values.
///
/// # Examples
///
/// ```rust
/// use frostpipe::object::{ObjectError, ValueKind};
///
/// let error = ObjectError::Frozen { kind: ValueKind::Record };
/// assert_eq!(format!("{error}"), "cannot modify a frozen record");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectError {
    /// A shared node was reached again while it was still being traversed.
    #[error("cyclic structure detected at `{path}`")]
    CyclicStructure {
        /// Route from the root to the back-reference, e.g. `$.owner.pets[0]`.
        path: String,
    },

    /// A write was attempted on a sealed record or sequence.
    #[error("cannot modify a frozen {kind}")]
    Frozen {
        /// The kind of node that rejected the write.
        kind: ValueKind,
    },

    /// An operation needed one kind of value and found another.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        /// The kind the operation required.
        expected: ValueKind,
        /// The kind that was actually present.
        actual: ValueKind,
    },

    /// A sequence index was outside `0..length`.
    #[error("index {index} is out of bounds for a sequence of length {length}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The sequence length at the time of the request.
        length: usize,
    },

    /// A path segment named a field that does not exist.
    #[error("missing field `{key}`")]
    MissingField {
        /// The missing key (or the non-numeric segment used on a sequence).
        key: String,
    },
}
