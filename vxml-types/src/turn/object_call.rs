//! Object call turns: invoke platform-specific functionality.
//!
//! See <https://www.w3.org/TR/voicexml20/#dml2.3.5>.

use super::{Turn, TurnKind, optional_non_empty};
use crate::{
    audio::non_empty, error::ValidationError, fetch::FetchConfiguration, json::JsonSerializable,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

/// How an object interprets a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterValueType {
    /// The value is data passed to the object as is.
    Data,
    /// The value is a URI the object dereferences.
    Ref,
}

impl ParameterValueType {
    /// The markup value of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Ref => "ref",
        }
    }
}

impl JsonSerializable for ParameterValueType {
    fn as_json(&self) -> Value {
        Value::from(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Payload {
    Value(String),
    Expression(String),
}

/// A named argument passed to the invoked object. Holds exactly one of a
/// literal value or an ECMAScript expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    payload: Payload,
    value_type: Option<ParameterValueType>,
    media_type: Option<String>,
}

impl Parameter {
    /// A parameter with a literal string value.
    pub fn with_value(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::builder(name).value(value).build()
    }

    /// A parameter evaluated from an ECMAScript expression.
    pub fn with_expression(
        name: impl Into<String>,
        expression: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::builder(name).expression(expression).build()
    }

    /// A parameter holding a JSON value, passed as an ECMAScript object
    /// literal expression.
    pub fn with_json(name: impl Into<String>, json: &Value) -> Result<Self, ValidationError> {
        Self::with_expression(name, json.to_string())
    }

    /// Start building a parameter.
    pub fn builder(name: impl Into<String>) -> ParameterBuilder {
        ParameterBuilder {
            name: name.into(),
            value: None,
            expression: None,
            value_type: None,
            media_type: None,
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The literal value, if this parameter has one.
    pub fn value(&self) -> Option<&str> {
        match &self.payload {
            Payload::Value(v) => Some(v),
            Payload::Expression(_) => None,
        }
    }

    /// The expression, if this parameter has one.
    pub fn expression(&self) -> Option<&str> {
        match &self.payload {
            Payload::Expression(e) => Some(e),
            Payload::Value(_) => None,
        }
    }

    /// Whether the value is data or a URI; `None` defers to the platform.
    pub fn value_type(&self) -> Option<ParameterValueType> {
        self.value_type
    }

    /// Media type of the resource when the value type is
    /// [`ParameterValueType::Ref`].
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }
}

impl JsonSerializable for Parameter {
    fn as_json(&self) -> Value {
        json!({
            "name": self.name,
            "expression": self.expression(),
            "value": self.value(),
            "type": self.media_type,
            "valueType": self.value_type.as_json(),
        })
    }
}

/// Builder for [`Parameter`].
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    name: String,
    value: Option<String>,
    expression: Option<String>,
    value_type: Option<ParameterValueType>,
    media_type: Option<String>,
}

impl ParameterBuilder {
    /// Set a literal value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set an ECMAScript expression.
    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    /// Set the value type.
    pub fn value_type(mut self, value_type: ParameterValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    /// Set the media type.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Validate and freeze the parameter. Exactly one of a value or an
    /// expression must have been set.
    pub fn build(self) -> Result<Parameter, ValidationError> {
        let name = non_empty(self.name, "parameter name")?;
        let payload = match (self.value, self.expression) {
            (Some(value), None) => Payload::Value(value),
            (None, Some(expression)) => Payload::Expression(non_empty(expression, "expression")?),
            (Some(_), Some(_)) => return Err(ValidationError::ConflictingPayload { parameter: name }),
            (None, None) => return Err(ValidationError::MissingPayload { parameter: name }),
        };
        Ok(Parameter {
            name,
            payload,
            value_type: self.value_type,
            media_type: optional_non_empty(self.media_type, "parameter type")?,
        })
    }
}

/// Payload of an object call turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectCall {
    class_id: Option<String>,
    code_base: Option<String>,
    code_type: Option<String>,
    data: Option<String>,
    media_type: Option<String>,
    archives: Vec<String>,
    fetch_configuration: Option<Arc<FetchConfiguration>>,
    parameters: Vec<Parameter>,
    post_object_script: Option<String>,
}

impl ObjectCall {
    /// Start building an object call turn.
    pub fn builder(name: impl Into<String>) -> ObjectCallBuilder {
        ObjectCallBuilder {
            name: name.into(),
            call: ObjectCall {
                class_id: None,
                code_base: None,
                code_type: None,
                data: None,
                media_type: None,
                archives: Vec::new(),
                fetch_configuration: None,
                parameters: Vec::new(),
                post_object_script: None,
            },
        }
    }

    /// URI of the object's implementation.
    pub fn class_id(&self) -> Option<&str> {
        self.class_id.as_deref()
    }

    /// Base path for relative `classid`, `data` and `archive` URIs.
    pub fn code_base(&self) -> Option<&str> {
        self.code_base.as_deref()
    }

    /// Content type of the code fetched from `classid`.
    pub fn code_type(&self) -> Option<&str> {
        self.code_type.as_deref()
    }

    /// URI of the object's data.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Content type of the data.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Archive URIs, in order. May be empty.
    pub fn archives(&self) -> &[String] {
        &self.archives
    }

    /// Fetch policy for the object's resources.
    pub fn fetch_configuration(&self) -> Option<&Arc<FetchConfiguration>> {
        self.fetch_configuration.as_ref()
    }

    /// Parameters, in order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Script run after the object returns, before the result is
    /// reported.
    pub fn post_object_script(&self) -> Option<&str> {
        self.post_object_script.as_deref()
    }
}

impl JsonSerializable for ObjectCall {
    fn as_json(&self) -> Value {
        json!({
            "classId": self.class_id,
            "codeBase": self.code_base,
            "codeType": self.code_type,
            "data": self.data,
            "type": self.media_type,
            "postObjectScript": self.post_object_script,
            "parameters": self.parameters.as_json(),
            "fetchConfiguration": self.fetch_configuration.as_json(),
            "archives": self.archives,
        })
    }
}

/// Builder for object call turns.
#[derive(Debug, Clone)]
pub struct ObjectCallBuilder {
    name: String,
    call: ObjectCall,
}

impl ObjectCallBuilder {
    /// Set the implementation URI.
    pub fn class_id(mut self, class_id: impl Into<String>) -> Self {
        self.call.class_id = Some(class_id.into());
        self
    }

    /// Set the code base.
    pub fn code_base(mut self, code_base: impl Into<String>) -> Self {
        self.call.code_base = Some(code_base.into());
        self
    }

    /// Set the code content type.
    pub fn code_type(mut self, code_type: impl Into<String>) -> Self {
        self.call.code_type = Some(code_type.into());
        self
    }

    /// Set the data URI.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.call.data = Some(data.into());
        self
    }

    /// Set the data content type.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.call.media_type = Some(media_type.into());
        self
    }

    /// Append an archive URI.
    pub fn archive(mut self, archive: impl Into<String>) -> Self {
        self.call.archives.push(archive.into());
        self
    }

    /// Append several archive URIs, keeping their order.
    pub fn archives<I, S>(mut self, archives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.call.archives.extend(archives.into_iter().map(Into::into));
        self
    }

    /// Share a fetch configuration with this turn.
    pub fn fetch_configuration(mut self, config: Arc<FetchConfiguration>) -> Self {
        self.call.fetch_configuration = Some(config);
        self
    }

    /// Append a parameter.
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.call.parameters.push(parameter);
        self
    }

    /// Append several parameters, keeping their order.
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.call.parameters.extend(parameters);
        self
    }

    /// Set the post-invocation script.
    pub fn post_object_script(mut self, script: impl Into<String>) -> Self {
        self.call.post_object_script = Some(script.into());
        self
    }

    /// Validate and freeze the turn.
    pub fn build(self) -> Result<Turn, ValidationError> {
        let mut call = self.call;
        if call.archives.iter().any(String::is_empty) {
            return Err(ValidationError::Empty { field: "archive" });
        }
        call.class_id = optional_non_empty(call.class_id, "classId")?;
        call.code_base = optional_non_empty(call.code_base, "codeBase")?;
        call.code_type = optional_non_empty(call.code_type, "codeType")?;
        call.data = optional_non_empty(call.data, "data")?;
        call.media_type = optional_non_empty(call.media_type, "type")?;
        call.post_object_script = optional_non_empty(call.post_object_script, "postObjectScript")?;
        Turn::new(self.name, TurnKind::ObjectCall(call))
    }
}
