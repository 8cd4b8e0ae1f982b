//! OpenAI-compatible chat completion client.
//!
//! Works against any provider that speaks the OpenAI `/chat/completions`
//! wire format (OpenAI, Groq, most local inference servers).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Result};
use super::client::ChatCompletionClient;
use super::types::{ChatMessage, Role};

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Chat completion client for OpenAI-compatible providers.
pub struct OpenAiCompatibleClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiCompatibleClient {
    /// Create a client against an arbitrary OpenAI-compatible base URL.
    ///
    /// `base_url` is the API root, e.g. `https://api.openai.com/v1`; the
    /// client appends `/chat/completions`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Create a client against the Groq API.
    pub fn groq(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(GROQ_BASE_URL, api_key, model)
    }

    /// The model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    fn wire_messages<'a>(messages: &'a [ChatMessage]) -> Vec<WireMessage<'a>> {
        messages
            .iter()
            .map(|m| WireMessage {
                // The observation role is a loop-level convention; on the wire
                // observations travel as user messages since the plain-text
                // protocol does not use provider tool-call ids.
                role: match m.role {
                    Role::Tool => "user",
                    other => other.as_str(),
                },
                content: &m.content,
            })
            .collect()
    }
}

#[async_trait]
impl ChatCompletionClient for OpenAiCompatibleClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: Self::wire_messages(messages),
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::model_request(format!(
                "provider returned {status}: {body}"
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AgentError::model_request(format!("malformed provider response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AgentError::model_request("provider response contained no completion"))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_role_maps_to_user_on_the_wire() {
        let messages = vec![
            ChatMessage::system("s"),
            ChatMessage::tool("<observation>6912</observation>"),
        ];
        let wire = OpenAiCompatibleClient::wire_messages(&messages);
        assert_eq!(wire[0].role, "system");
        assert_eq!(wire[1].role, "user");
    }
}
