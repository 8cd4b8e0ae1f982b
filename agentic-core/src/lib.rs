//! # Agentic Core
//!
//! Building blocks for language-model agents that satisfy natural-language
//! goals by iteratively invoking typed tools. The crate provides the tool
//! invocation substrate (schema-described, safely callable functions) and
//! two model-driven loops over it:
//!
//! - **[`agents::ToolAgent`]** — single-shot dispatch: ask the model whether
//!   a tool is needed, invoke at most one, fold the observation back in and
//!   answer.
//! - **[`agents::ReactAgent`]** — the ReAct pattern: iterate Thought, Action
//!   and Observation steps until a final answer or an iteration budget is
//!   exhausted.
//!
//! The model provider is an external collaborator behind the
//! [`models::ChatCompletionClient`] trait; an OpenAI-compatible client ships
//! behind the `http` feature.
//!
//! ## Quick Start
//!
//! ```rust
//! use agentic_core::tools::{FunctionTool, ParameterType, Tool, ToolRegistry};
//! use serde_json::json;
//!
//! let sum = FunctionTool::builder("sum_two_elements")
//!     .description("Computes the sum of two integers.")
//!     .required_param("a", ParameterType::Integer, "The first integer to be summed")
//!     .required_param("b", ParameterType::Integer, "The second integer to be summed")
//!     .returns(ParameterType::Integer)
//!     .handler(|args| async move {
//!         let a = args["a"].as_i64().unwrap_or_default();
//!         let b = args["b"].as_i64().unwrap_or_default();
//!         Ok(json!(a + b))
//!     });
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(Box::new(sum)).unwrap();
//!
//! // The registry's signature blocks are what the model is told about.
//! assert!(registry.describe_all().contains("sum_two_elements"));
//! ```

#![warn(clippy::all)]

pub mod error;

pub mod agents;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod tools;

pub use error::{AgentError, Result};

pub use agents::{DispatchResult, ReactAgent, ToolAgent, DEFAULT_MAX_ITERATIONS};
pub use models::{ChatCompletionClient, ChatHistory, ChatMessage, Role};
pub use parser::{CallIntent, ParsedOutput};
pub use tools::{FunctionTool, ParameterSchema, ParameterType, Tool, ToolRegistry, ToolSchema};

#[cfg(feature = "http")]
pub use models::OpenAiCompatibleClient;

/// Current version of agentic-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
