//! Model client boundary and conversation message types.

mod client;
mod context;
mod types;

#[cfg(feature = "http")]
mod openai;

pub use client::ChatCompletionClient;
pub use context::ChatHistory;
pub use types::{ChatMessage, Role};

#[cfg(feature = "http")]
pub use openai::OpenAiCompatibleClient;
