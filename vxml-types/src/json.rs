//! Canonical JSON form of turns and their nested values.
//!
//! The canonical form is used for logging, structural diffing in tests
//! and cross-process exchange. Unlike the compiled document, absent
//! optional fields are kept as explicit `null` members so two turns can
//! be compared member by member.

use serde_json::Value;
use std::sync::Arc;

/// A value with a canonical JSON representation.
pub trait JsonSerializable {
    /// The canonical JSON form. Calling this repeatedly on the same
    /// value always yields equal JSON.
    fn as_json(&self) -> Value;
}

impl<T: JsonSerializable + ?Sized> JsonSerializable for Arc<T> {
    fn as_json(&self) -> Value {
        (**self).as_json()
    }
}

impl<T: JsonSerializable> JsonSerializable for Option<T> {
    fn as_json(&self) -> Value {
        self.as_ref().map_or(Value::Null, |value| value.as_json())
    }
}

impl<T: JsonSerializable> JsonSerializable for [T] {
    fn as_json(&self) -> Value {
        Value::Array(self.iter().map(|value| value.as_json()).collect())
    }
}

impl<T: JsonSerializable> JsonSerializable for Vec<T> {
    fn as_json(&self) -> Value {
        self.as_slice().as_json()
    }
}
