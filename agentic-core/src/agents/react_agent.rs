//! Multi-step ReAct reasoning agent.

use crate::error::{AgentError, Result};
use crate::models::{ChatCompletionClient, ChatHistory, ChatMessage};
use crate::parser::{extract_thought, parse_react, CallIntent, ParsedOutput};
use crate::prompts::{observation_message, question_message, react_system_prompt, FORMAT_REMINDER};
use crate::tools::ToolRegistry;

/// Default iteration budget for a ReAct run
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// An agent that answers a question by iterating Thought, Action and
/// Observation steps until the model emits a final answer or the iteration
/// budget runs out.
///
/// Steps are strictly sequential: the loop never issues another model
/// request until the prior observation has been folded into the
/// conversation, so each step sees the full history of the run. Tool-level
/// failures become observations the model can react to on the next
/// iteration; only transport failures to the model abort the run.
pub struct ReactAgent {
    client: Box<dyn ChatCompletionClient>,
    registry: ToolRegistry,
    max_iterations: usize,
}

impl ReactAgent {
    /// Create a reasoning agent with the default iteration budget
    pub fn new(client: Box<dyn ChatCompletionClient>, registry: ToolRegistry) -> Self {
        Self {
            client,
            registry,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the default iteration budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The tools available to this agent
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Run the reasoning loop with the configured iteration budget.
    pub async fn run(&self, user_msg: &str) -> Result<String> {
        self.run_with_budget(user_msg, self.max_iterations).await
    }

    /// Run the reasoning loop with an explicit iteration budget.
    ///
    /// Returns the model's final answer, or
    /// [`AgentError::IterationBudgetExceeded`] when `max_iterations` passes
    /// complete without one. Parse failures and tool failures are folded
    /// back into the conversation and count against the same budget.
    pub async fn run_with_budget(&self, user_msg: &str, max_iterations: usize) -> Result<String> {
        let mut history = ChatHistory::new();
        history.push(ChatMessage::system(react_system_prompt(&self.registry)));
        history.push(ChatMessage::user(question_message(user_msg)));

        for iteration in 1..=max_iterations {
            let reply = self.client.complete(history.messages()).await?;

            if let Some(thought) = extract_thought(&reply) {
                tracing::debug!(iteration, %thought, "model thought");
            }

            history.push(ChatMessage::assistant(reply.clone()));

            match parse_react(&reply) {
                Ok(ParsedOutput::FinalAnswer(answer)) => {
                    tracing::info!(iterations = iteration, "run finished with a final answer");
                    return Ok(answer);
                }
                Ok(ParsedOutput::ToolCall(intent)) => {
                    let observation = self.execute_intent(&intent).await;
                    history.push(ChatMessage::tool(observation_message(&observation)));
                }
                Err(AgentError::UnparseableOutput { raw }) => {
                    tracing::warn!(iteration, raw = %raw, "unparseable model turn");
                    history.push(ChatMessage::system(FORMAT_REMINDER));
                }
                Err(other) => return Err(other),
            }
        }

        tracing::warn!(limit = max_iterations, "iteration budget exhausted");
        Err(AgentError::IterationBudgetExceeded {
            limit: max_iterations,
        })
    }

    /// Execute one call intent, folding any tool-level failure into the
    /// observation text so the model can self-correct.
    async fn execute_intent(&self, intent: &CallIntent) -> String {
        let tool = match self.registry.lookup(&intent.name) {
            Ok(tool) => tool,
            Err(err) => {
                tracing::warn!(tool = %intent.name, %err, "tool lookup failed");
                return format!("Error: {err}");
            }
        };

        match tool.invoke(&intent.arguments).await {
            Ok(value) => {
                let observation = tool.result_to_string(&value);
                tracing::info!(tool = %intent.name, call_id = %intent.id, "tool invoked");
                observation
            }
            Err(err) => {
                tracing::warn!(tool = %intent.name, %err, "tool invocation failed");
                format!("Error: {err}")
            }
        }
    }
}
