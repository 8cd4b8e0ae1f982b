//! Conversation context for a single agent run.

use super::types::ChatMessage;

/// An append-only sequence of conversation messages.
///
/// The history is the only cross-step shared state of an agent run. It grows
/// monotonically while the run is in progress and is owned exclusively by the
/// running loop; each independent `run` call starts from a fresh history.
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the history
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// All messages, in insertion order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in the history
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the history holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Role;

    #[test]
    fn history_preserves_insertion_order() {
        let mut history = ChatHistory::new();
        history.push(ChatMessage::system("instructions"));
        history.push(ChatMessage::user("question"));
        history.push(ChatMessage::assistant("reply"));

        let roles: Vec<Role> = history.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
        assert_eq!(history.len(), 3);
    }
}
