//! Shared, sealable storage behind [`Record`](super::Record) and
//! [`Sequence`](super::Sequence).

use std::cell::{Cell, Ref, RefCell};

use super::{ObjectError, ValueKind};

/// Interior storage of a dynamic node.
///
/// The seal flag lives outside the `RefCell` so it can be read and set while
/// the content is borrowed further up a cyclic traversal.
#[derive(Debug, Default)]
pub(crate) struct SharedNode<T> {
    sealed: Cell<bool>,
    content: RefCell<T>,
}

impl<T> SharedNode<T> {
    pub(crate) const fn new(content: T) -> Self {
        Self {
            sealed: Cell::new(false),
            content: RefCell::new(content),
        }
    }

    pub(crate) fn is_sealed(&self) -> bool {
        self.sealed.get()
    }

    /// Marks the node sealed. Returns `true` if it was already sealed.
    pub(crate) fn seal(&self) -> bool {
        self.sealed.replace(true)
    }

    pub(crate) fn read(&self) -> Ref<'_, T> {
        self.content.borrow()
    }

    /// Applies `edit` to the content unless the node is sealed.
    ///
    /// The mutable borrow is released before the result is returned, so any
    /// value `edit` hands back is dropped outside of it.
    pub(crate) fn write<R>(
        &self,
        kind: ValueKind,
        edit: impl FnOnce(&mut T) -> Result<R, ObjectError>,
    ) -> Result<R, ObjectError> {
        if self.is_sealed() {
            trace_event!(debug, kind = %kind, "rejected write to sealed node");
            return Err(ObjectError::Frozen { kind });
        }
        let mut content = self.content.borrow_mut();
        edit(&mut content)
    }
}
