//! Error handling for agentic-core.

use thiserror::Error;

/// Result type alias for agentic-core operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Main error type for the agentic-core library.
///
/// Tool- and parser-level failures are recoverable inside a reasoning loop
/// (they are folded back into the conversation as observations or corrective
/// notes). Transport failures to the model provider are not, and propagate
/// out of `run`.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A tool was called with missing or mistyped parameters
    #[error("invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments {
        /// The tool whose argument validation failed
        tool: String,
        /// What was wrong with the arguments
        reason: String,
    },

    /// The model named a tool that is not in the registry
    #[error("unknown tool '{name}', available tools: [{}]", .available.join(", "))]
    UnknownTool {
        /// The requested tool name
        name: String,
        /// Names of the tools that are registered
        available: Vec<String>,
    },

    /// Two tools with the same name were registered
    #[error("a tool named '{name}' is already registered")]
    DuplicateToolName {
        /// The conflicting tool name
        name: String,
    },

    /// The wrapped function failed during execution
    #[error("tool '{tool}' failed: {message}")]
    ToolExecution {
        /// The tool that failed
        tool: String,
        /// Description of the underlying failure
        message: String,
    },

    /// Model output did not match the expected protocol markers
    #[error("model output did not match the expected format: {raw}")]
    UnparseableOutput {
        /// The raw model text that could not be parsed
        raw: String,
    },

    /// The request to the model provider failed
    #[error("model request failed: {message}")]
    ModelRequest {
        /// Description of the transport failure
        message: String,
        /// The underlying error, when one is available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The reasoning loop exhausted its iteration budget without a final answer
    #[error("no final answer after {limit} iterations; the iteration budget was exceeded")]
    IterationBudgetExceeded {
        /// The configured maximum number of iterations
        limit: usize,
    },

    /// JSON serialization or deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AgentError {
    /// Create an `InvalidArguments` error
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        AgentError::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a `ToolExecution` error
    pub fn tool_execution(tool: impl Into<String>, message: impl Into<String>) -> Self {
        AgentError::ToolExecution {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a `ModelRequest` error from a message alone
    pub fn model_request(message: impl Into<String>) -> Self {
        AgentError::ModelRequest {
            message: message.into(),
            source: None,
        }
    }

    /// Whether a reasoning loop can recover from this error by reporting it
    /// back to the model instead of aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AgentError::InvalidArguments { .. }
                | AgentError::UnknownTool { .. }
                | AgentError::ToolExecution { .. }
                | AgentError::UnparseableOutput { .. }
        )
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        AgentError::ModelRequest {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
