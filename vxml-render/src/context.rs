//! The rendering context: everything the compiler needs to know about
//! the surrounding dialogue.

use crate::config::{ConfigError, RenderConfig};

/// Names and targets supplied by the dialogue a turn belongs to.
///
/// The compiler never hard-codes platform conventions; it asks the
/// context. [`DialogueContext`] is the configuration-backed
/// implementation; tests and embedders can supply their own.
pub trait RenderingContext: Send + Sync {
    /// Script object collecting turn results.
    fn scope_object(&self) -> &str;

    /// Function on the scope object that receives object call results.
    fn value_result_function(&self) -> &str;

    /// Function on the scope object that receives transfer outcomes.
    fn transfer_status_function(&self) -> &str;

    /// Where the dialogue continues once a turn completes.
    fn submit_target(&self) -> &str;

    /// Application root document, if any.
    fn application_root(&self) -> Option<&str>;

    /// Id of the single form of every compiled document.
    fn form_id(&self) -> &str;

    /// Platform attribute for the fetch attempt count.
    fn fetch_attempts_attribute(&self) -> Option<&str> {
        None
    }

    /// Platform attribute for the per-attempt fetch timeout.
    fn fetch_attempt_timeout_attribute(&self) -> Option<&str> {
        None
    }

    /// Script statement reporting an object call result held in
    /// `expression`.
    fn value_result_call(&self, expression: &str) -> String {
        format!(
            "{}.{}({expression});",
            self.scope_object(),
            self.value_result_function()
        )
    }

    /// Script statement reporting a transfer outcome held in `expression`.
    fn transfer_status_call(&self, expression: &str) -> String {
        format!(
            "{}.{}({expression});",
            self.scope_object(),
            self.transfer_status_function()
        )
    }
}

/// A [`RenderingContext`] backed by a [`RenderConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueContext {
    config: RenderConfig,
}

impl DialogueContext {
    /// Context with the default conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with the given conventions, once they validate.
    pub fn from_config(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The underlying configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl TryFrom<RenderConfig> for DialogueContext {
    type Error = ConfigError;

    fn try_from(config: RenderConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

impl RenderingContext for DialogueContext {
    fn scope_object(&self) -> &str {
        &self.config.scope_object
    }

    fn value_result_function(&self) -> &str {
        &self.config.value_result_function
    }

    fn transfer_status_function(&self) -> &str {
        &self.config.transfer_status_function
    }

    fn submit_target(&self) -> &str {
        &self.config.submit_target
    }

    fn application_root(&self) -> Option<&str> {
        self.config.application_root.as_deref()
    }

    fn form_id(&self) -> &str {
        &self.config.form_id
    }

    fn fetch_attempts_attribute(&self) -> Option<&str> {
        self.config.fetch_attempts_attribute.as_deref()
    }

    fn fetch_attempt_timeout_attribute(&self) -> Option<&str> {
        self.config.fetch_attempt_timeout_attribute.as_deref()
    }
}
