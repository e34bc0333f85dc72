//! Resource-fetch policy for documents, audio, grammars, scripts and
//! object data.
//!
//! A [`FetchConfiguration`] is plain data consumed by the voice browser.
//! Nothing in this workspace retries or times out a fetch itself; the
//! compiler only translates the policy into markup attributes.

use crate::{duration::DurationMs, error::ValidationError, json::JsonSerializable};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// When the interpreter may fetch a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchHint {
    /// The resource may be fetched when the document is loaded.
    Prefetch,
    /// The resource is fetched only when actually needed.
    Safe,
}

impl FetchHint {
    /// The markup value of this hint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prefetch => "prefetch",
            Self::Safe => "safe",
        }
    }
}

impl JsonSerializable for FetchHint {
    fn as_json(&self) -> Value {
        Value::from(self.as_str())
    }
}

/// Fetch timeout, caching and retry directives. Every field is
/// optional; `None` means "use the platform default".
///
/// Immutable once built. Share a single instance between turns with
/// `Arc<FetchConfiguration>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FetchConfiguration {
    fetch_hint: Option<FetchHint>,
    fetch_timeout: Option<DurationMs>,
    max_age: Option<DurationMs>,
    max_stale: Option<DurationMs>,
    fetch_attempts: Option<u32>,
    fetch_attempt_timeout: Option<DurationMs>,
}

impl FetchConfiguration {
    /// Start building a configuration.
    pub fn builder() -> FetchConfigurationBuilder {
        FetchConfigurationBuilder::default()
    }

    /// When the resource may be fetched.
    pub fn fetch_hint(&self) -> Option<FetchHint> {
        self.fetch_hint
    }

    /// Overall time allowed to fetch the resource.
    pub fn fetch_timeout(&self) -> Option<DurationMs> {
        self.fetch_timeout
    }

    /// Maximum acceptable age of a cached copy.
    pub fn max_age(&self) -> Option<DurationMs> {
        self.max_age
    }

    /// Maximum acceptable staleness of an expired cached copy.
    pub fn max_stale(&self) -> Option<DurationMs> {
        self.max_stale
    }

    /// Number of fetch attempts before giving up.
    pub fn fetch_attempts(&self) -> Option<u32> {
        self.fetch_attempts
    }

    /// Time allowed for each individual attempt.
    pub fn fetch_attempt_timeout(&self) -> Option<DurationMs> {
        self.fetch_attempt_timeout
    }

    /// True when every field defers to the platform.
    pub fn is_platform_default(&self) -> bool {
        *self == Self::default()
    }
}

impl JsonSerializable for FetchConfiguration {
    fn as_json(&self) -> Value {
        json!({
            "fetchHint": self.fetch_hint.as_json(),
            "fetchTimeout": self.fetch_timeout.map(|d| d.as_millis()),
            "maxAge": self.max_age.map(|d| d.as_millis()),
            "maxStale": self.max_stale.map(|d| d.as_millis()),
            "fetchAttempts": self.fetch_attempts,
            "fetchAttemptTimeout": self.fetch_attempt_timeout.map(|d| d.as_millis()),
        })
    }
}

/// Builder for [`FetchConfiguration`].
#[derive(Debug, Clone, Default)]
pub struct FetchConfigurationBuilder {
    inner: FetchConfiguration,
}

impl FetchConfigurationBuilder {
    /// Set the fetch hint.
    pub fn fetch_hint(mut self, hint: FetchHint) -> Self {
        self.inner.fetch_hint = Some(hint);
        self
    }

    /// Set the overall fetch timeout.
    pub fn fetch_timeout(mut self, timeout: DurationMs) -> Self {
        self.inner.fetch_timeout = Some(timeout);
        self
    }

    /// Set the maximum cache age.
    pub fn max_age(mut self, max_age: DurationMs) -> Self {
        self.inner.max_age = Some(max_age);
        self
    }

    /// Set the maximum cache staleness.
    pub fn max_stale(mut self, max_stale: DurationMs) -> Self {
        self.inner.max_stale = Some(max_stale);
        self
    }

    /// Set the number of fetch attempts. Must be at least one.
    pub fn fetch_attempts(mut self, attempts: u32) -> Self {
        self.inner.fetch_attempts = Some(attempts);
        self
    }

    /// Set the per-attempt timeout.
    pub fn fetch_attempt_timeout(mut self, timeout: DurationMs) -> Self {
        self.inner.fetch_attempt_timeout = Some(timeout);
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<FetchConfiguration, ValidationError> {
        if self.inner.fetch_attempts == Some(0) {
            return Err(ValidationError::OutOfRange {
                field: "fetchAttempts",
                reason: "at least one attempt is required".into(),
            });
        }
        if let (Some(attempt), Some(total)) =
            (self.inner.fetch_attempt_timeout, self.inner.fetch_timeout)
        {
            if attempt > total {
                return Err(ValidationError::OutOfRange {
                    field: "fetchAttemptTimeout",
                    reason: format!("{attempt} exceeds the fetch timeout of {total}"),
                });
            }
        }
        Ok(self.inner)
    }
}
