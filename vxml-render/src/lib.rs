#![deny(missing_docs)]
//! Compiles dialogue turns into VoiceXML documents.
//!
//! Each turn becomes one document holding a single form:
//!
//! ```text
//! <vxml version="2.1" xmlns="http://www.w3.org/2001/vxml" application="root.vxml">
//!   <form id="form">…</form>
//! </vxml>
//! ```
//!
//! | Turn | Form content |
//! |------|--------------|
//! | Message | `<block>` with one `<prompt>`, then `<goto>` |
//! | Object call | `<object>` with `<param>`s and a `<filled>` reporting the result |
//! | Transfer | `<transfer>`, with outcome branches when supervised |
//!
//! Platform conventions (script scope, result functions, continuation
//! target) come from a [`RenderingContext`], normally a
//! [`DialogueContext`] built from a [`RenderConfig`]. Unset optional
//! fields never produce an attribute.
//!
//! After rendering, the turn's adapters run over the document; see
//! `vxml-adapters`. Every compilation emits `vxml.render.start` and
//! `vxml.render.complete` tracing events at `DEBUG` level.

pub mod compiler;
pub mod config;
pub mod context;
mod elements;
mod message;
mod object_call;
mod transfer;

pub use compiler::{Compiler, compile};
pub use config::{ConfigError, RenderConfig};
pub use context::{DialogueContext, RenderingContext};
