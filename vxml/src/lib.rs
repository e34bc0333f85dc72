#![deny(missing_docs)]
//! # vxml: umbrella crate
//!
//! Single import surface for compiling voice dialogue turns. Re-exports
//! the turn taxonomy, the adapter pipeline and the compiler behind
//! feature flags, plus a `prelude` for the happy path.

#[cfg(feature = "adapters")]
pub use vxml_adapters;
#[cfg(feature = "render")]
pub use vxml_render;
#[cfg(feature = "core")]
pub use vxml_types;

/// Happy-path imports for building and compiling turns.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use vxml_types::{
        AdapterError, AudioItem, Document, DocumentAdapter, DurationMs, Element, FetchConfiguration,
        FetchHint, JsonSerializable, Message, ObjectCall, Parameter, ParameterValueType,
        RenderError, Transfer, TransferStatus, TransferStyle, Turn, TurnKind, ValidationError,
    };

    #[cfg(feature = "adapters")]
    pub use vxml_adapters::{AdapterFn, AdapterPipeline, TracingAdapter};

    #[cfg(feature = "render")]
    pub use vxml_render::{Compiler, DialogueContext, RenderConfig, RenderingContext, compile};
}
