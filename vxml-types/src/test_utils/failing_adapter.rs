//! FailingAdapter: always returns an error.

use crate::adapter::DocumentAdapter;
use crate::dom::Document;
use crate::error::AdapterError;

/// An adapter that fails with a fixed message.
pub struct FailingAdapter {
    message: String,
}

impl FailingAdapter {
    /// Create an adapter failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl DocumentAdapter for FailingAdapter {
    fn name(&self) -> &str {
        "failing"
    }

    fn adapt(&self, _document: &mut Document) -> Result<(), AdapterError> {
        Err(AdapterError::Failed(self.message.clone()))
    }
}
