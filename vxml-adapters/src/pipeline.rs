//! The ordered adapter pipeline.

use vxml_types::{AdapterError, AdapterRef, Document, DocumentAdapter};

/// Runs document adapters over a compiled document in an ordered pipeline.
///
/// Adapters run in the order they were added, each one seeing the
/// mutations of every earlier adapter. The first error stops the
/// pipeline: later adapters are not called and the error is returned
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct AdapterPipeline {
    adapters: Vec<AdapterRef>,
}

impl AdapterPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Add an adapter to the end of the pipeline.
    pub fn add(&mut self, adapter: impl Into<AdapterRef>) {
        self.adapters.push(adapter.into());
    }

    /// Builder-style [`add`](Self::add) taking an adapter by value.
    pub fn with(mut self, adapter: impl DocumentAdapter + 'static) -> Self {
        self.adapters.push(AdapterRef::new(adapter));
        self
    }

    /// Number of adapters in the pipeline.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// True when the pipeline holds no adapter.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// The adapters, in run order.
    pub fn adapters(&self) -> &[AdapterRef] {
        &self.adapters
    }

    /// Run every adapter over `document`.
    pub fn run(&self, document: &mut Document) -> Result<(), AdapterError> {
        apply(&self.adapters, document)
    }
}

impl FromIterator<AdapterRef> for AdapterPipeline {
    fn from_iter<I: IntoIterator<Item = AdapterRef>>(iter: I) -> Self {
        Self {
            adapters: iter.into_iter().collect(),
        }
    }
}

impl Extend<AdapterRef> for AdapterPipeline {
    fn extend<I: IntoIterator<Item = AdapterRef>>(&mut self, iter: I) {
        self.adapters.extend(iter);
    }
}

/// Run `adapters` over `document` in slice order, stopping at the first
/// failure.
pub fn apply(adapters: &[AdapterRef], document: &mut Document) -> Result<(), AdapterError> {
    for (index, adapter) in adapters.iter().enumerate() {
        tracing::debug!(adapter = adapter.name(), index, "vxml.adapter.apply");
        if let Err(error) = adapter.adapt(document) {
            tracing::warn!(
                adapter = adapter.name(),
                index,
                error = %error,
                "vxml.adapter.failed"
            );
            return Err(error);
        }
    }
    Ok(())
}
