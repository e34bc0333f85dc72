//! Adapter implementations for testing.
//!
//! Available behind the `test-utils` feature flag.

mod failing_adapter;
mod recording_adapter;

pub use failing_adapter::FailingAdapter;
pub use recording_adapter::{RecordedDocument, RecordingAdapter};
