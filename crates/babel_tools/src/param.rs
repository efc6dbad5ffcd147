//! Argument extraction for tools.
//!
//! - [`FunctionCall`]: a named call with its JSON object arguments
//! - [`InputParam`]: types that can describe themselves as a JSON schema
//!   parameter

use crate::error::ToolError;
use crate::schema::ParameterInfo;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A function call request with name and JSON parameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FunctionCall {
    /// Function name.
    pub name: String,
    /// Parameters as a JSON object map.
    pub parameters: Map<String, Value>,
}

impl FunctionCall {
    /// Creates a new function call.
    pub fn new(name: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Creates a function call from a [`Value`].
    ///
    /// `null` is accepted as an empty argument object.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::ParameterError`] if `parameters` is neither an
    /// object nor `null`.
    pub fn from_value(name: impl Into<String>, parameters: Value) -> Result<Self, ToolError> {
        match parameters {
            Value::Object(map) => Ok(Self::new(name, map)),
            Value::Null => Ok(Self::new(name, Map::new())),
            other => Err(ToolError::parameter_error(format!(
                "Parameters must be an object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Deserializes a required parameter by name.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::ParameterError`] if the parameter is missing or
    /// cannot be deserialized as `T`.
    pub fn get_param<T: DeserializeOwned>(&self, name: &str) -> Result<T, ToolError> {
        let value = self
            .parameters
            .get(name)
            .ok_or_else(|| ToolError::parameter_error(format!("Missing parameter: {name}")))?;

        serde_json::from_value(value.clone()).map_err(|err| {
            ToolError::parameter_error(format!("Failed to deserialize parameter '{name}': {err}"))
        })
    }

    /// Deserializes an optional parameter by name. Returns `None` if missing or null.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::ParameterError`] if the parameter is present but
    /// cannot be deserialized as `T`.
    pub fn get_optional_param<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Option<T>, ToolError> {
        match self.parameters.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|err| {
                    ToolError::parameter_error(format!(
                        "Failed to deserialize parameter '{name}': {err}"
                    ))
                }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Types whose JSON schema can describe a tool parameter.
///
/// Implemented for every [`JsonSchema`] type, so `String::schema_info("text")`
/// yields a required `{"type": "string"}` parameter.
pub trait InputParam {
    /// Returns schema information for a parameter of this type.
    fn schema_info(param_name: &str) -> ParameterInfo;
}

impl<T: DeserializeOwned + JsonSchema> InputParam for T {
    fn schema_info(param_name: &str) -> ParameterInfo {
        let mut generator = schemars::SchemaGenerator::default();
        let schema = T::json_schema(&mut generator);
        let schema_value = serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({}));
        ParameterInfo::new(param_name, schema_value)
    }
}
