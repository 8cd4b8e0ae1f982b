//! Integration tests for the single-shot dispatch agent.

mod common;

use std::sync::Arc;

use agentic_core::{AgentError, Role, ToolAgent};
use common::{calculator_registry, ScriptedClient};

#[tokio::test]
async fn unrelated_question_yields_a_direct_answer_with_zero_tool_calls() {
    let client = Arc::new(ScriptedClient::new(["My name is Aria."]));

    let agent = ToolAgent::new(Box::new(client.clone()), calculator_registry());
    let result = agent.run("Tell me your name").await.unwrap();

    assert!(result.is_direct_answer());
    assert_eq!(result.answer, "My name is Aria.");
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn one_tool_call_then_a_final_answer() {
    let client = Arc::new(ScriptedClient::new([
        r#"<tool_call>{"name": "sum_two_elements", "arguments": {"a": 40, "b": 2}, "id": 0}</tool_call>"#,
        "The sum is 42.",
    ]));

    let agent = ToolAgent::new(Box::new(client.clone()), calculator_registry());
    let result = agent.run("what is 40 plus 2?").await.unwrap();

    assert_eq!(result.invoked_tool.as_deref(), Some("sum_two_elements"));
    assert_eq!(result.answer, "The sum is 42.");
    assert_eq!(client.calls(), 2);

    // The follow-up request carried the observation.
    let follow_up = client.conversation(1);
    let observation = follow_up.iter().find(|m| m.role == Role::Tool).unwrap();
    assert!(observation.content.contains("42"));
}

#[tokio::test]
async fn the_follow_up_never_triggers_a_second_tool_call() {
    let client = Arc::new(ScriptedClient::new([
        r#"<tool_call>{"name": "sum_two_elements", "arguments": {"a": 1, "b": 2}, "id": 0}</tool_call>"#,
        r#"<tool_call>{"name": "multiply_two_elements", "arguments": {"a": 3, "b": 3}, "id": 1}</tool_call>"#,
    ]));

    let agent = ToolAgent::new(Box::new(client.clone()), calculator_registry());
    let result = agent.run("add then multiply").await.unwrap();

    // The second reply is returned verbatim; dispatch is single-shot.
    assert_eq!(result.invoked_tool.as_deref(), Some("sum_two_elements"));
    assert!(result.answer.contains("multiply_two_elements"));
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn unknown_tool_surfaces_to_the_caller() {
    let client = Arc::new(ScriptedClient::new([
        r#"<tool_call>{"name": "frobnicate", "arguments": {}, "id": 0}</tool_call>"#,
    ]));

    let agent = ToolAgent::new(Box::new(client), calculator_registry());
    let err = agent.run("do something strange").await.unwrap_err();
    assert!(matches!(err, AgentError::UnknownTool { .. }));
}

#[tokio::test]
async fn invalid_arguments_surface_to_the_caller() {
    let client = Arc::new(ScriptedClient::new([
        r#"<tool_call>{"name": "sum_two_elements", "arguments": {"a": 1}, "id": 0}</tool_call>"#,
    ]));

    let agent = ToolAgent::new(Box::new(client), calculator_registry());
    let err = agent.run("add some numbers").await.unwrap_err();
    assert!(matches!(err, AgentError::InvalidArguments { .. }));
}

#[tokio::test]
async fn malformed_tool_call_tag_is_unparseable() {
    let client = Arc::new(ScriptedClient::new(["<tool_call>oops</tool_call>"]));

    let agent = ToolAgent::new(Box::new(client), calculator_registry());
    let err = agent.run("anything").await.unwrap_err();
    assert!(matches!(err, AgentError::UnparseableOutput { .. }));
}
