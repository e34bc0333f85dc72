//! The adapter interface: post-compilation document mutation.

use crate::{dom::Document, error::AdapterError};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// A document post-processor.
///
/// Adapters are attached to a turn and run, in registration order, on
/// every document compiled from that turn. Each adapter receives the
/// document after every earlier adapter has run and may mutate it in
/// place (inject instrumentation, rewrite URIs, add properties).
///
/// Returning an error aborts the compilation: no document is produced
/// and the error is reported to the compiler's caller as is.
pub trait DocumentAdapter: Send + Sync {
    /// Human-readable adapter name, used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Mutate the compiled document.
    fn adapt(&self, document: &mut Document) -> Result<(), AdapterError>;
}

/// A shared handle to a [`DocumentAdapter`].
///
/// Two handles are equal when they point to the same adapter instance.
/// Adapters carry behavior rather than data, so identity is the only
/// meaningful equality for turn comparison.
#[derive(Clone)]
pub struct AdapterRef(Arc<dyn DocumentAdapter>);

impl AdapterRef {
    /// Wrap an adapter in a new shared handle.
    pub fn new(adapter: impl DocumentAdapter + 'static) -> Self {
        Self(Arc::new(adapter))
    }

    /// Reuse an existing shared adapter.
    pub fn from_arc(adapter: Arc<dyn DocumentAdapter>) -> Self {
        Self(adapter)
    }

    fn address(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl<A: DocumentAdapter + 'static> From<Arc<A>> for AdapterRef {
    fn from(adapter: Arc<A>) -> Self {
        Self(adapter)
    }
}

impl Deref for AdapterRef {
    type Target = dyn DocumentAdapter;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for AdapterRef {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for AdapterRef {}

impl Hash for AdapterRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl fmt::Debug for AdapterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdapterRef").field(&self.0.name()).finish()
    }
}
