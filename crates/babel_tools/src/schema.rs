//! Schema types for tool parameter metadata.
//!
//! Provides [`ParameterInfo`] for individual parameter schemas and
//! [`FunctionMetadata`] for building complete tool definitions with
//! JSON Schema parameter specifications.

use babel_models::llm::ToolDefinition;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Schema information for a single tool parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name, used as the JSON schema property key.
    pub name: String,
    /// Parameter description shown to the orchestrator.
    pub description: Option<String>,
    /// JSON Schema for this parameter's type.
    pub schema: Value,
    /// Whether this parameter is required.
    pub required: bool,
    /// Default value for optional parameters.
    pub default_value: Option<Value>,
}

impl ParameterInfo {
    /// Creates a new required parameter with the given name and schema.
    pub fn new(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            description: None,
            schema,
            required: true,
            default_value: None,
        }
    }

    /// Sets the parameter description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the parameter optional with the given default.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.required = false;
        self.default_value = Some(default);
        self
    }

    /// Returns this parameter's property schema with description and
    /// default folded in.
    fn property_schema(&self) -> Value {
        let mut schema = self.schema.clone();
        if let Some(obj) = schema.as_object_mut() {
            if let Some(description) = &self.description {
                obj.insert("description".to_string(), Value::from(description.clone()));
            }
            if let Some(default) = &self.default_value {
                obj.insert("default".to_string(), default.clone());
            }
        }
        schema
    }
}

/// Metadata describing a tool's name, description, and ordered parameters.
///
/// Used to build [`ToolDefinition`] instances with proper JSON Schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// Function name.
    pub name: String,
    /// Function description.
    pub description: Option<String>,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterInfo>,
}

impl FunctionMetadata {
    /// Creates new metadata with the given function name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameters: Vec::new(),
        }
    }

    /// Sets the function description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn add_parameter(mut self, param: ParameterInfo) -> Self {
        self.parameters.push(param);
        self
    }

    /// Builds the object JSON Schema for the function's parameters.
    ///
    /// Property order follows declaration order; a parameter is listed in
    /// `required` unless it carries a default.
    #[must_use]
    pub fn schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &self.parameters {
            properties.insert(param.name.clone(), param.property_schema());
            if param.required && param.default_value.is_none() {
                required.push(Value::from(param.name.clone()));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required
        })
    }

    /// Converts this metadata into a [`ToolDefinition`].
    #[must_use]
    pub fn to_tool_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            parameters: self.schema(),
        }
    }
}
