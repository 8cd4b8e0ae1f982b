//! Prompt construction for the tool-calling protocols.
//!
//! The system prompts are a textual convention, not a wire format: they tell
//! the model which tools exist (via the registry's signature blocks) and how
//! to mark up its output so the parser can classify each turn.

use crate::tools::ToolRegistry;

const TOOL_SYSTEM_PROMPT: &str = r#"You are a function-calling AI model. You are provided with function signatures within <tools></tools> XML tags. Based on the user's request you may decide to call one of the functions. Don't make assumptions about what values to plug into functions; if a required argument is unknown, ask the user instead of calling the function.

To call a function, return exactly one JSON object within <tool_call></tool_call> XML tags:

<tool_call>
{"name": <function-name>, "arguments": <args-dict>, "id": <call-id>}
</tool_call>

If no function is needed, answer the user directly in plain text without any tags.

Here are the available tools:

<tools>
%TOOL_SIGNATURES%
</tools>"#;

const REACT_SYSTEM_PROMPT: &str = r#"You operate in a loop of Thought, Action and Observation steps to answer the question inside <question></question> tags.

1. Reason about the question inside <thought></thought> tags.
2. To act, emit exactly one tool call as a JSON object inside <tool_call></tool_call> tags:

<tool_call>
{"name": <function-name>, "arguments": <args-dict>, "id": <call-id>}
</tool_call>

3. You will then be given the result inside <observation></observation> tags.
4. Repeat until you can answer; then reply with the answer inside <response></response> tags and nothing else.

Never invent observations. Don't make assumptions about what values to plug into functions. You may call the functions below:

<tools>
%TOOL_SIGNATURES%
</tools>"#;

/// Corrective note appended when a model turn matches neither protocol marker
pub const FORMAT_REMINDER: &str = "Your last reply did not follow the expected format. Reply with either one <tool_call>{...}</tool_call> action or a final <response>...</response> answer.";

/// Build the system prompt for the single-shot dispatch pattern
pub fn tool_system_prompt(registry: &ToolRegistry) -> String {
    TOOL_SYSTEM_PROMPT.replace("%TOOL_SIGNATURES%", &registry.describe_all())
}

/// Build the system prompt for the ReAct pattern
pub fn react_system_prompt(registry: &ToolRegistry) -> String {
    REACT_SYSTEM_PROMPT.replace("%TOOL_SIGNATURES%", &registry.describe_all())
}

/// Wrap a user question for the ReAct protocol
pub fn question_message(user_msg: &str) -> String {
    format!("<question>{user_msg}</question>")
}

/// Wrap a tool result (or error description) as an observation
pub fn observation_message(content: &str) -> String {
    format!("<observation>{content}</observation>")
}
