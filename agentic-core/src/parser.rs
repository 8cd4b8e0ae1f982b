//! Output parser for model text.
//!
//! The prompting convention marks up model output with XML-style tags:
//! `<thought>` for reasoning, `<tool_call>` for a JSON call request and
//! `<response>` for the final answer. The parser extracts these markers into
//! a tagged variant the loops can pattern-match on; it performs no type
//! coercion (that is the tool wrapper's job) and is pure, so parsing the
//! same text twice always yields the same classification.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AgentError, Result};
use crate::tools::ToolArguments;

/// A parsed request to invoke a specific tool with specific arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CallIntent {
    /// Call identifier; generated when the model omits one
    pub id: String,
    /// Target tool name
    pub name: String,
    /// Raw argument values keyed by parameter name
    pub arguments: ToolArguments,
}

/// Classification of one model turn under the ReAct protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedOutput {
    /// The model produced a terminal answer
    FinalAnswer(String),
    /// The model requested exactly one tool call
    ToolCall(CallIntent),
}

fn response_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<response>\s*(.*?)\s*</response>").unwrap())
}

fn tool_call_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<tool_call>\s*(.*?)\s*</tool_call>").unwrap())
}

fn thought_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<thought>\s*(.*?)\s*</thought>").unwrap())
}

/// Parse one model turn under the ReAct protocol.
///
/// A `<response>` block classifies the turn as a final answer and takes
/// precedence over any `<tool_call>` block, since a final answer terminates
/// the run. Among multiple `<tool_call>` blocks only the first is honored;
/// the rest are ignored. Text carrying neither marker, or a `<tool_call>`
/// block whose body is not the expected JSON object, fails with
/// [`AgentError::UnparseableOutput`] which the reasoning loop recovers from
/// with a corrective note.
pub fn parse_react(text: &str) -> Result<ParsedOutput> {
    if let Some(captures) = response_re().captures(text) {
        return Ok(ParsedOutput::FinalAnswer(captures[1].to_string()));
    }

    if let Some(captures) = tool_call_re().captures(text) {
        return Ok(ParsedOutput::ToolCall(parse_intent(&captures[1], text)?));
    }

    Err(AgentError::UnparseableOutput {
        raw: text.to_string(),
    })
}

/// Extract a tool call from a dispatch-pattern model turn.
///
/// The single-shot dispatch protocol lets the model answer in plain text
/// instead of emitting markers, so the absence of a `<tool_call>` block is
/// not an error here: `Ok(None)` means the text is a direct answer. A
/// present but malformed block still fails with
/// [`AgentError::UnparseableOutput`].
pub fn extract_tool_call(text: &str) -> Result<Option<CallIntent>> {
    match tool_call_re().captures(text) {
        Some(captures) => parse_intent(&captures[1], text).map(Some),
        None => Ok(None),
    }
}

/// Extract the `<thought>` block from a model turn, if present.
pub fn extract_thought(text: &str) -> Option<String> {
    thought_re()
        .captures(text)
        .map(|captures| captures[1].to_string())
}

fn parse_intent(body: &str, raw: &str) -> Result<CallIntent> {
    let unparseable = || AgentError::UnparseableOutput {
        raw: raw.to_string(),
    };

    let value: Value = serde_json::from_str(body).map_err(|_| unparseable())?;
    let object = value.as_object().ok_or_else(unparseable)?;

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(unparseable)?
        .to_string();

    let arguments = match object.get("arguments") {
        None | Some(Value::Null) => ToolArguments::new(),
        Some(Value::Object(map)) => map.clone().into_iter().collect(),
        // Some models JSON-encode the argument object as a string
        Some(Value::String(s)) => serde_json::from_str::<Value>(s)
            .ok()
            .and_then(|v| v.as_object().cloned())
            .map(|map| map.into_iter().collect())
            .ok_or_else(unparseable)?,
        Some(_) => return Err(unparseable()),
    };

    let id = match object.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    Ok(CallIntent {
        id,
        name,
        arguments,
    })
}
