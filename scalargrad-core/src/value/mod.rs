// src/value/mod.rs

use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod arithmetic_ops;
mod autograd;
pub mod create;
mod debug;
mod traits;

// Re-export creation functions to make them public
pub use create::{labeled_leaves, leaves};

/// A scalar node in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** The same node can be the operand of any number of
///     results (diamond dependencies), and clones are cheap handle copies.
/// 2.  **Interior Mutability:** The accumulated gradient can be updated during a
///     backward pass through a shared reference.
///
/// Equality and hashing are by identity, never by value: two nodes holding the
/// same number are distinct vertices of the graph.
pub struct Value {
    /// Rc for shared ownership, RefCell for the mutable gradient.
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    pub(crate) fn from_value_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    /// Immutable borrow of the underlying node.
    pub(crate) fn borrow_value_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Mutable borrow of the underlying node. Callers must not hold any other
    /// borrow of the same node.
    pub(crate) fn borrow_value_data_mut(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
