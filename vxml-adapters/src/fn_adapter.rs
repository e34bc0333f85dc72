//! Closure-backed adapters.

use std::fmt;
use vxml_types::{AdapterError, Document, DocumentAdapter};

/// A [`DocumentAdapter`] backed by a closure.
///
/// ```
/// use vxml_adapters::AdapterFn;
/// use vxml_types::Document;
///
/// let stamp = AdapterFn::new("stamp", |document: &mut Document| {
///     document.root_mut().set_attribute("xml:lang", "fr-CA");
///     Ok(())
/// });
/// # let _ = stamp;
/// ```
pub struct AdapterFn<F> {
    name: String,
    f: F,
}

impl<F> AdapterFn<F>
where
    F: Fn(&mut Document) -> Result<(), AdapterError> + Send + Sync,
{
    /// Wrap `f` under the given adapter name.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> DocumentAdapter for AdapterFn<F>
where
    F: Fn(&mut Document) -> Result<(), AdapterError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn adapt(&self, document: &mut Document) -> Result<(), AdapterError> {
        (self.f)(document)
    }
}

impl<F> fmt::Debug for AdapterFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterFn").field("name", &self.name).finish()
    }
}
