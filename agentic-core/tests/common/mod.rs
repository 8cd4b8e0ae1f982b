//! Shared test helpers: scripted model clients and the calculator tool set.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use agentic_core::{
    AgentError, ChatCompletionClient, ChatMessage, FunctionTool, ParameterType, Result,
    ToolRegistry,
};

/// A model client that replays a fixed script of completions and records
/// every conversation it was shown.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<String>>,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedClient {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Number of completions the client has served
    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// The conversation passed to the n-th completion (0-based)
    pub fn conversation(&self, call: usize) -> Vec<ChatMessage> {
        self.seen.lock().unwrap()[call].clone()
    }
}

#[async_trait]
impl ChatCompletionClient for ScriptedClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.seen.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AgentError::model_request("script exhausted"))
    }
}

/// A model client that returns the same completion forever.
pub struct RepeatingClient {
    reply: String,
    calls: Mutex<usize>,
}

impl RepeatingClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ChatCompletionClient for RepeatingClient {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.reply.clone())
    }
}

/// A model client whose transport always fails.
pub struct FailingClient;

#[async_trait]
impl ChatCompletionClient for FailingClient {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String> {
        Err(AgentError::model_request("connection refused"))
    }
}

pub fn sum_tool() -> FunctionTool {
    FunctionTool::builder("sum_two_elements")
        .description("Computes the sum of two integers.")
        .required_param("a", ParameterType::Integer, "The first integer to be summed")
        .required_param("b", ParameterType::Integer, "The second integer to be summed")
        .returns(ParameterType::Integer)
        .handler(|args| async move {
            let a = args["a"].as_i64().unwrap_or_default();
            let b = args["b"].as_i64().unwrap_or_default();
            Ok(json!(a + b))
        })
}

pub fn multiply_tool() -> FunctionTool {
    FunctionTool::builder("multiply_two_elements")
        .description("Multiplies two integers.")
        .required_param("a", ParameterType::Integer, "The first integer to multiply")
        .required_param("b", ParameterType::Integer, "The second integer to multiply")
        .returns(ParameterType::Integer)
        .handler(|args| async move {
            let a = args["a"].as_i64().unwrap_or_default();
            let b = args["b"].as_i64().unwrap_or_default();
            Ok(json!(a * b))
        })
}

pub fn compute_log_tool() -> FunctionTool {
    FunctionTool::builder("compute_log")
        .description("Computes the natural logarithm of an integer greater than zero.")
        .required_param("x", ParameterType::Integer, "The value; must be greater than 0")
        .returns(ParameterType::Number)
        .handler(|args| async move {
            let x = args["x"].as_i64().unwrap_or_default();
            if x <= 0 {
                return Ok(json!(
                    "Logarithm is undefined for values less than or equal to 0."
                ));
            }
            Ok(json!((x as f64).ln()))
        })
}

pub fn calculator_registry() -> ToolRegistry {
    ToolRegistry::with_tools(vec![
        Box::new(sum_tool()),
        Box::new(multiply_tool()),
        Box::new(compute_log_tool()),
    ])
    .unwrap()
}
