//! Model client boundary.

use async_trait::async_trait;

use crate::error::Result;
use super::types::ChatMessage;

/// Chat completion client trait for interacting with language models.
///
/// The agent loops treat a client as a pure function from an ordered list of
/// role-tagged messages to a text completion. Transport failures must surface
/// as [`AgentError::ModelRequest`](crate::AgentError::ModelRequest); the loops
/// propagate them to the caller rather than retrying.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    /// Produce a single text completion for the given conversation.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

#[async_trait]
impl<T: ChatCompletionClient + ?Sized> ChatCompletionClient for std::sync::Arc<T> {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        (**self).complete(messages).await
    }
}
