#![deny(missing_docs)]
//! Document adapter pipeline for compiled VoiceXML turns.
//!
//! The [`AdapterPipeline`] collects [`DocumentAdapter`] implementations
//! into an ordered pipeline. After a turn is compiled, its adapters run
//! in registration order over the document, each mutating it in place.
//! The pipeline is fail-fast: the first adapter error aborts the run and
//! is handed back unchanged, so the compiler can report it against the
//! turn being rendered.
//!
//! Two ready-made adapters are provided: [`TracingAdapter`] logs the
//! document shape and [`AdapterFn`] wraps a closure.

pub mod fn_adapter;
pub mod pipeline;
pub mod tracing_adapter;

pub use fn_adapter::AdapterFn;
pub use pipeline::{AdapterPipeline, apply};
pub use tracing_adapter::TracingAdapter;
pub use vxml_types::{AdapterError, AdapterRef, DocumentAdapter};
