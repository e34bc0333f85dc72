//! # vxml-types: turn taxonomy for compiled VoiceXML dialogues
//!
//! A voice dialogue advances one *turn* at a time. Each turn is compiled
//! into a VoiceXML document that a voice browser executes (play audio,
//! call a platform object, transfer the call), and each turn has a
//! canonical JSON form used for logging, fixtures and exchange.
//!
//! This crate holds the data side of that process:
//!
//! | Concern | Types |
//! |---------|-------|
//! | Turns | [`Turn`], [`TurnKind`], [`Message`], [`ObjectCall`], [`Transfer`] |
//! | Prompt content | [`AudioItem`] |
//! | Resource fetching | [`FetchConfiguration`], [`FetchHint`] |
//! | Transfer outcomes | [`TransferStatus`], [`TransferStyle`] |
//! | Documents | [`Document`], [`Element`], [`Node`] |
//! | Post-processing | [`DocumentAdapter`], [`AdapterRef`] |
//! | Canonical JSON | [`JsonSerializable`] |
//! | Errors | [`ValidationError`], [`RenderError`], [`AdapterError`] |
//!
//! Compilation itself lives in `vxml-render`; the adapter pipeline in
//! `vxml-adapters`.
//!
//! Every value here is immutable once built and `Send + Sync`. The only
//! mutable state is a turn's adapter list, which is appended to through
//! `&mut Turn` before the turn is shared.

#![deny(missing_docs)]

pub mod adapter;
pub mod audio;
pub mod dom;
pub mod duration;
pub mod error;
pub mod fetch;
pub mod json;
pub mod transfer_status;
pub mod turn;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use adapter::{AdapterRef, DocumentAdapter};
pub use audio::AudioItem;
pub use dom::{Document, Element, Node};
pub use duration::DurationMs;
pub use error::{AdapterError, RenderError, RenderFailure, ValidationError};
pub use fetch::{FetchConfiguration, FetchConfigurationBuilder, FetchHint};
pub use json::JsonSerializable;
pub use transfer_status::TransferStatus;
pub use turn::{
    Message, MessageBuilder, ObjectCall, ObjectCallBuilder, Parameter, ParameterBuilder,
    ParameterValueType, Transfer, TransferBuilder, TransferStyle, Turn, TurnKind,
};
