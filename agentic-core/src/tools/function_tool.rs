//! Function tool implementation for wrapping async Rust functions as tools.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AgentError, Result};
use super::schema::{ParameterSchema, ParameterType, ToolSchema};

/// Raw tool arguments as parsed from model output
pub type ToolArguments = HashMap<String, Value>;

/// Type alias for the boxed async function a tool wraps
pub type AsyncToolFn = Box<
    dyn Fn(ToolArguments) -> Pin<Box<dyn Future<Output = Result<Value>> + Send>> + Send + Sync,
>;

/// Base trait for all tools.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of the tool
    fn name(&self) -> &str;

    /// Get the description of the tool
    fn description(&self) -> &str;

    /// Get the schema for this tool
    fn schema(&self) -> &ToolSchema;

    /// Render the tool's signature for prompt embedding
    fn describe(&self) -> String {
        self.schema().describe()
    }

    /// Validate the arguments and execute the tool.
    ///
    /// Fails with [`AgentError::InvalidArguments`] before touching the
    /// wrapped function when a required parameter is missing or a value
    /// cannot be coerced to its declared type; fails with
    /// [`AgentError::ToolExecution`] when the function itself errors.
    async fn invoke(&self, args: &ToolArguments) -> Result<Value>;

    /// Convert a return value to the string fed back as an observation
    fn result_to_string(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Debug for dyn Tool + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}

/// Create tools by wrapping async Rust functions.
///
/// A `FunctionTool` pairs an explicit [`ToolSchema`] with a boxed async
/// closure over a JSON argument map. The schema is built once by the
/// [`FunctionToolBuilder`] and drives both the prompt text and argument
/// validation, so the description the model sees cannot drift from what is
/// actually callable.
///
/// # Example
///
/// ```rust
/// use agentic_core::tools::{FunctionTool, ParameterType, Tool};
/// use serde_json::json;
///
/// let sum = FunctionTool::builder("sum_two_elements")
///     .description("Computes the sum of two integers.")
///     .required_param("a", ParameterType::Integer, "The first integer to be summed")
///     .required_param("b", ParameterType::Integer, "The second integer to be summed")
///     .returns(ParameterType::Integer)
///     .handler(|args| async move {
///         let a = args["a"].as_i64().unwrap_or_default();
///         let b = args["b"].as_i64().unwrap_or_default();
///         Ok(json!(a + b))
///     });
///
/// assert_eq!(sum.name(), "sum_two_elements");
/// assert_eq!(sum.schema().parameters.len(), 2);
/// ```
pub struct FunctionTool {
    schema: ToolSchema,
    function: AsyncToolFn,
}

impl FunctionTool {
    /// Start building a function tool with the given name
    pub fn builder(name: impl Into<String>) -> FunctionToolBuilder {
        FunctionToolBuilder {
            name: name.into(),
            description: String::new(),
            parameters: Vec::new(),
            returns: ParameterType::String,
        }
    }

    /// Check required parameters and coerce argument types against the schema.
    ///
    /// Returns the coerced argument map. Runs entirely before the wrapped
    /// function, so a validation failure never partially executes the tool.
    fn validate(&self, args: &ToolArguments) -> Result<ToolArguments> {
        let mut coerced = ToolArguments::with_capacity(args.len());

        for param in &self.schema.parameters {
            match args.get(&param.name) {
                Some(value) => {
                    let typed = param.param_type.coerce(value).ok_or_else(|| {
                        AgentError::invalid_arguments(
                            &self.schema.name,
                            format!(
                                "parameter '{}' expects type {}, got {}",
                                param.name, param.param_type, value
                            ),
                        )
                    })?;
                    coerced.insert(param.name.clone(), typed);
                }
                None if param.required => {
                    return Err(AgentError::invalid_arguments(
                        &self.schema.name,
                        format!("missing required parameter '{}'", param.name),
                    ));
                }
                None => {}
            }
        }

        if let Some(unknown) = args.keys().find(|k| {
            !self.schema.parameters.iter().any(|p| &p.name == *k)
        }) {
            return Err(AgentError::invalid_arguments(
                &self.schema.name,
                format!("unknown parameter '{unknown}'"),
            ));
        }

        Ok(coerced)
    }
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.schema.name
    }

    fn description(&self) -> &str {
        &self.schema.description
    }

    fn schema(&self) -> &ToolSchema {
        &self.schema
    }

    async fn invoke(&self, args: &ToolArguments) -> Result<Value> {
        let coerced = self.validate(args)?;

        tracing::debug!(tool = %self.schema.name, args = ?coerced, "invoking tool");

        (self.function)(coerced).await.map_err(|e| match e {
            already @ AgentError::ToolExecution { .. } => already,
            other => AgentError::tool_execution(&self.schema.name, other.to_string()),
        })
    }
}

/// Builder for [`FunctionTool`].
///
/// Collects the name, description, ordered parameter descriptors and return
/// type, then binds the handler; `handler` finishes the build.
pub struct FunctionToolBuilder {
    name: String,
    description: String,
    parameters: Vec<ParameterSchema>,
    returns: ParameterType,
}

impl FunctionToolBuilder {
    /// Set the human-readable description of the tool
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a required parameter
    pub fn required_param(
        mut self,
        name: impl Into<String>,
        param_type: ParameterType,
        description: impl Into<String>,
    ) -> Self {
        self.parameters
            .push(ParameterSchema::required(name, param_type, description));
        self
    }

    /// Declare an optional parameter
    pub fn optional_param(
        mut self,
        name: impl Into<String>,
        param_type: ParameterType,
        description: impl Into<String>,
    ) -> Self {
        self.parameters
            .push(ParameterSchema::optional(name, param_type, description));
        self
    }

    /// Declare the return type
    pub fn returns(mut self, returns: ParameterType) -> Self {
        self.returns = returns;
        self
    }

    /// Bind the async handler and build the tool
    pub fn handler<F, Fut>(self, func: F) -> FunctionTool
    where
        F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        FunctionTool {
            schema: ToolSchema {
                name: self.name,
                description: self.description,
                parameters: self.parameters,
                returns: self.returns,
            },
            function: Box::new(move |args| Box::pin(func(args))),
        }
    }
}
