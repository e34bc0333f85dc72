//! RecordingAdapter: records every document it sees and changes nothing.

use crate::adapter::DocumentAdapter;
use crate::dom::Document;
use crate::error::AdapterError;
use std::sync::Mutex;

/// A snapshot of a document seen by a [`RecordingAdapter`].
#[derive(Debug, Clone)]
pub struct RecordedDocument {
    /// Name given to the recording adapter.
    pub adapter: String,
    /// The document as the adapter received it.
    pub document: Document,
}

/// An adapter that records a copy of every document it is given.
/// A stamping recorder also sets an attribute on the root element, so a
/// later adapter can observe the mutation.
pub struct RecordingAdapter {
    name: String,
    stamp: Option<(String, String)>,
    seen: Mutex<Vec<RecordedDocument>>,
}

impl RecordingAdapter {
    /// Create a recording adapter that leaves documents untouched.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stamp: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Create a recording adapter that sets `attribute = value` on the root
    /// element after recording.
    pub fn stamping(
        name: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            stamp: Some((attribute.into(), value.into())),
            ..Self::new(name)
        }
    }

    /// Documents recorded so far, oldest first.
    pub fn documents(&self) -> Vec<RecordedDocument> {
        self.seen.lock().unwrap().clone()
    }
}

impl DocumentAdapter for RecordingAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn adapt(&self, document: &mut Document) -> Result<(), AdapterError> {
        self.seen.lock().unwrap().push(RecordedDocument {
            adapter: self.name.clone(),
            document: document.clone(),
        });
        if let Some((attribute, value)) = &self.stamp {
            document.root_mut().set_attribute(attribute.as_str(), value.as_str());
        }
        Ok(())
    }
}
