//! Concrete [`DocumentAdapter`] using the [`tracing`] crate.
//!
//! Emits one structured event describing the shape of every compiled
//! document. Wire to any `tracing`-compatible subscriber.

use vxml_types::{AdapterError, Document, DocumentAdapter};

/// A [`DocumentAdapter`] that logs the compiled document and leaves it
/// untouched.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `root` | Root element name |
/// | `elements` | Element count, root included |
/// | `prompts` | Number of `<prompt>` elements |
/// | `application` | Application root, when declared |
///
/// With `with_markup`, the serialized document is attached at `TRACE`
/// level as well.
///
/// # Example
///
/// ```no_run
/// use vxml_adapters::TracingAdapter;
/// use vxml_types::{AudioItem, Turn};
///
/// let turn = Turn::message("greeting", [AudioItem::speech("hi").unwrap()])
///     .unwrap()
///     .with_adapter(TracingAdapter::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAdapter {
    markup: bool,
}

impl TracingAdapter {
    /// Create a new `TracingAdapter`.
    #[must_use]
    pub fn new() -> Self {
        Self { markup: false }
    }

    /// Also log the full document at `TRACE` level.
    #[must_use]
    pub fn with_markup(mut self) -> Self {
        self.markup = true;
        self
    }
}

impl DocumentAdapter for TracingAdapter {
    fn name(&self) -> &str {
        "tracing"
    }

    fn adapt(&self, document: &mut Document) -> Result<(), AdapterError> {
        let root = document.root();
        tracing::debug!(
            root = root.name(),
            elements = root.descendants().len(),
            prompts = document.find_all("prompt").len(),
            application = root.attribute("application"),
            "vxml.document.compiled"
        );
        if self.markup {
            tracing::trace!(markup = %document.to_xml(), "vxml.document.markup");
        }
        Ok(())
    }
}
