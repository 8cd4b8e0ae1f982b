//! Tool schemas for prompt embedding and argument validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a tool parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// UTF-8 text
    String,
    /// Whole number
    Integer,
    /// Floating point number
    Number,
    /// True or false
    Boolean,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl ParameterType {
    /// String form used in schema rendering
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Integer => "integer",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Array => "array",
            ParameterType::Object => "object",
        }
    }

    /// Coerce a raw argument value to this type where feasible.
    ///
    /// Models frequently quote numbers or pass integers for floats; lossless
    /// conversions are accepted, everything else is rejected with `None`.
    pub fn coerce(&self, value: &Value) -> Option<Value> {
        match self {
            ParameterType::String => match value {
                Value::String(_) => Some(value.clone()),
                Value::Number(n) => Some(Value::String(n.to_string())),
                Value::Bool(b) => Some(Value::String(b.to_string())),
                _ => None,
            },
            ParameterType::Integer => match value {
                Value::Number(n) if n.is_i64() || n.is_u64() => Some(value.clone()),
                Value::Number(n) => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && f.is_finite())
                    .map(|f| Value::from(f as i64)),
                Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
                _ => None,
            },
            ParameterType::Number => match value {
                Value::Number(_) => Some(value.clone()),
                Value::String(s) => s.trim().parse::<f64>().ok().and_then(|f| {
                    serde_json::Number::from_f64(f).map(Value::Number)
                }),
                _ => None,
            },
            ParameterType::Boolean => match value {
                Value::Bool(_) => Some(value.clone()),
                Value::String(s) => match s.trim() {
                    "true" => Some(Value::Bool(true)),
                    "false" => Some(Value::Bool(false)),
                    _ => None,
                },
                _ => None,
            },
            ParameterType::Array => matches!(value, Value::Array(_)).then(|| value.clone()),
            ParameterType::Object => matches!(value, Value::Object(_)).then(|| value.clone()),
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor for a single tool parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// The parameter name
    pub name: String,
    /// The declared type
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    /// Human-readable purpose of the parameter
    pub description: String,
    /// Whether the parameter must be supplied
    pub required: bool,
}

impl ParameterSchema {
    /// Create a required parameter descriptor
    pub fn required(
        name: impl Into<String>,
        param_type: ParameterType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: description.into(),
            required: true,
        }
    }

    /// Create an optional parameter descriptor
    pub fn optional(
        name: impl Into<String>,
        param_type: ParameterType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: description.into(),
            required: false,
        }
    }
}

/// Schema definition for a tool.
///
/// Built once when the tool is constructed and never recomputed per call;
/// the same descriptor drives both the prompt text the model sees and the
/// validation applied to the arguments it sends back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// The name of the tool
    pub name: String,
    /// Description of what the tool does
    pub description: String,
    /// Ordered parameter descriptors
    pub parameters: Vec<ParameterSchema>,
    /// The declared return type
    pub returns: ParameterType,
}

impl ToolSchema {
    /// Render the schema as a JSON signature block for prompt embedding.
    ///
    /// Parameters are serialized as an ordered array, so the rendering is
    /// deterministic for a given schema.
    pub fn describe(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}
