// src/value/debug.rs
use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A borrow can only fail if a backward rule is mid-update on this node.
        match self.data.try_borrow() {
            Ok(guard) => write!(
                f,
                "Value(label={:?}, data={}, grad={}, op={:?}, operands={})",
                guard.label,
                guard.data,
                guard.grad,
                guard.op.label(),
                guard.operands.len()
            ),
            Err(_) => write!(f, "Value(<mutably borrowed>)"),
        }
    }
}

impl fmt::Display for Value {
    /// `label: data`, or just `data` for unlabelled nodes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.borrow_value_data();
        match &guard.label {
            Some(label) => write!(f, "{}: {}", label, guard.data),
            None => write!(f, "{}", guard.data),
        }
    }
}
