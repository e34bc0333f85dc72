//! Error types for turn construction, adapters and rendering.

use thiserror::Error;

/// Construction-time errors. Raised by validating constructors and
/// builders; never produced during compilation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field, or an optional field that was explicitly set,
    /// is empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A required field was never provided to the builder.
    #[error("{field} is required")]
    Missing {
        /// Name of the missing field.
        field: &'static str,
    },

    /// An object parameter was given both a value and an expression.
    #[error("parameter {parameter}: value and expression are mutually exclusive")]
    ConflictingPayload {
        /// Name of the parameter.
        parameter: String,
    },

    /// An object parameter was given neither a value nor an expression.
    #[error("parameter {parameter}: a value or an expression is required")]
    MissingPayload {
        /// Name of the parameter.
        parameter: String,
    },

    /// An option was set on a transfer style that does not support it.
    #[error("{option} is not supported by {style} transfers")]
    UnsupportedTransferOption {
        /// The option that was set.
        option: &'static str,
        /// The transfer style (`bridge`, `blind` or `consultation`).
        style: &'static str,
    },

    /// A field holds a value outside its accepted range.
    #[error("{field}: {reason}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with the value.
        reason: String,
    },
}

/// Document adapter errors. An adapter error aborts the compilation
/// that triggered it.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The adapter could not process the document.
    #[error("adapter failed: {0}")]
    Failed(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Why a turn could not be rendered.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RenderFailure {
    /// A document adapter failed. The adapter's error is surfaced as is.
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// The turn reached the compiler in a state it cannot render.
    #[error("unrenderable turn: {0}")]
    Unrenderable(String),
}

/// A failed compilation. Carries the name of the offending turn.
#[derive(Debug, Error)]
#[error("failed to render turn '{turn}': {source}")]
pub struct RenderError {
    /// Name of the turn being compiled.
    pub turn: String,
    /// Underlying cause.
    #[source]
    pub source: RenderFailure,
}

impl RenderError {
    /// Create a new rendering error for the named turn.
    pub fn new(turn: impl Into<String>, source: impl Into<RenderFailure>) -> Self {
        Self {
            turn: turn.into(),
            source: source.into(),
        }
    }

    /// Name of the turn that failed to render.
    pub fn turn(&self) -> &str {
        &self.turn
    }

    /// The adapter error, if an adapter caused the failure.
    pub fn adapter_error(&self) -> Option<&AdapterError> {
        match &self.source {
            RenderFailure::Adapter(e) => Some(e),
            RenderFailure::Unrenderable(_) => None,
        }
    }
}
