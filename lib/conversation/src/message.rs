//! Message types for conversations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use talking_bot_ai::{LlmMessage, MessageRole as LlmRole};
use talking_bot_core::MessageId;

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User/human message.
    User,
    /// Assistant/bot message.
    Assistant,
    /// System message.
    System,
}

impl From<MessageRole> for LlmRole {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => LlmRole::User,
            MessageRole::Assistant => LlmRole::Assistant,
            MessageRole::System => LlmRole::System,
        }
    }
}

/// A recorded entry in the conversation history.
///
/// Hosts may send only `role` and `content`; the id and timestamp are
/// filled in on arrival.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    #[serde(default)]
    pub id: MessageId,
    /// Message role.
    pub role: MessageRole,
    /// Message text.
    pub content: String,
    /// When the message was recorded.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a new message.
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Converts to the form sent to the language model.
    #[must_use]
    pub fn to_llm(&self) -> LlmMessage {
        LlmMessage::new(self.role.into(), self.content.clone())
    }
}
