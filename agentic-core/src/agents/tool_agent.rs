//! Single-shot tool dispatch agent.

use crate::error::Result;
use crate::models::{ChatCompletionClient, ChatHistory, ChatMessage};
use crate::parser::extract_tool_call;
use crate::prompts::{observation_message, tool_system_prompt};
use crate::tools::ToolRegistry;

/// Outcome of one dispatch run.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResult {
    /// The final answer text
    pub answer: String,
    /// Name of the tool that was invoked, or `None` for a direct answer
    pub invoked_tool: Option<String>,
}

impl DispatchResult {
    /// Whether the run ended without calling any tool
    pub fn is_direct_answer(&self) -> bool {
        self.invoked_tool.is_none()
    }
}

/// An agent that asks the model once whether a tool is needed, invokes at
/// most one tool, and produces a final answer.
///
/// Unlike [`ReactAgent`](crate::agents::ReactAgent) this pattern never loops:
/// even if the follow-up completion requests another tool, its text is
/// returned as the answer. Tool lookup and invocation failures surface to
/// the caller, since there is no further iteration in which the model could
/// self-correct.
pub struct ToolAgent {
    client: Box<dyn ChatCompletionClient>,
    registry: ToolRegistry,
}

impl ToolAgent {
    /// Create a dispatch agent over a model client and a tool registry
    pub fn new(client: Box<dyn ChatCompletionClient>, registry: ToolRegistry) -> Self {
        Self { client, registry }
    }

    /// The tools available to this agent
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Run one dispatch round for the given user message.
    pub async fn run(&self, user_msg: &str) -> Result<DispatchResult> {
        let mut history = ChatHistory::new();
        history.push(ChatMessage::system(tool_system_prompt(&self.registry)));
        history.push(ChatMessage::user(user_msg));

        let reply = self.client.complete(history.messages()).await?;

        let Some(intent) = extract_tool_call(&reply)? else {
            tracing::debug!("model answered directly, no tool invoked");
            return Ok(DispatchResult {
                answer: reply,
                invoked_tool: None,
            });
        };

        let tool = self.registry.lookup(&intent.name)?;
        let result = tool.invoke(&intent.arguments).await?;
        let observation = tool.result_to_string(&result);
        tracing::info!(tool = %intent.name, call_id = %intent.id, "tool invoked");

        history.push(ChatMessage::assistant(reply));
        history.push(ChatMessage::tool(observation_message(&observation)));
        history.push(ChatMessage::user(
            "Given the observation, answer the original request.",
        ));

        let answer = self.client.complete(history.messages()).await?;
        Ok(DispatchResult {
            answer,
            invoked_tool: Some(intent.name),
        })
    }
}
