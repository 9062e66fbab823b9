// src/value/traits.rs

use crate::value::Value;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Shallow clone: the new handle points at the same node.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl PartialEq for Value {
    /// Identity comparison. Two distinct nodes holding the same number are not equal.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

// --- Lifting raw numbers to leaves ---

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}
