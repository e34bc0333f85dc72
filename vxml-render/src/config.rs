//! Configuration for the document compiler.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform naming conventions used when compiling turns.
///
/// Every field has a default, so a partial JSON object only overrides
/// what it names:
///
/// ```
/// use vxml_render::RenderConfig;
///
/// let config = RenderConfig::from_json_str(r#"{"formId": "main"}"#).unwrap();
/// assert_eq!(config.form_id, "main");
/// assert_eq!(config.submit_target, RenderConfig::default().submit_target);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderConfig {
    /// Script object that collects turn results.
    pub scope_object: String,

    /// Function on the scope object receiving object call results.
    pub value_result_function: String,

    /// Function on the scope object receiving transfer outcomes.
    pub transfer_status_function: String,

    /// URI the dialogue continues to once a turn completes.
    pub submit_target: String,

    /// Application root document. `None` omits the `application`
    /// attribute.
    pub application_root: Option<String>,

    /// Id of the single form in every compiled document.
    pub form_id: String,

    /// Platform attribute carrying the fetch attempt count. Fetch attempts
    /// are not rendered unless this is set.
    pub fetch_attempts_attribute: Option<String>,

    /// Platform attribute carrying the per-attempt fetch timeout.
    pub fetch_attempt_timeout_attribute: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scope_object: "application.dialogue".into(),
            value_result_function: "addValueResult".into(),
            transfer_status_function: "addTransferStatusResult".into(),
            submit_target: "root.vxml#submit".into(),
            application_root: Some("root.vxml".into()),
            form_id: "form".into(),
            fetch_attempts_attribute: None,
            fetch_attempt_timeout_attribute: None,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name the compiler emits is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("scopeObject", &self.scope_object),
            ("valueResultFunction", &self.value_result_function),
            ("transferStatusFunction", &self.transfer_status_function),
            ("submitTarget", &self.submit_target),
            ("formId", &self.form_id),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(ConfigError::Empty { field: *field });
        }
        let optional = [
            ("applicationRoot", &self.application_root),
            ("fetchAttemptsAttribute", &self.fetch_attempts_attribute),
            ("fetchAttemptTimeoutAttribute", &self.fetch_attempt_timeout_attribute),
        ];
        if let Some((field, _)) = optional
            .iter()
            .find(|(_, value)| value.as_deref() == Some(""))
        {
            return Err(ConfigError::Empty { field: *field });
        }
        Ok(())
    }
}

/// Errors from loading a [`RenderConfig`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON could not be parsed.
    #[error("invalid render configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A name the compiler emits is empty.
    #[error("render configuration: {field} must not be empty")]
    Empty {
        /// The offending field, as spelled in JSON.
        field: &'static str,
    },
}
