//! Language-model primitives for talking-bot.
//!
//! This crate provides:
//!
//! - **Backend trait**: text-in, text-out completion used for chit-chat
//! - **OpenAI backend**: the chat-completions implementation of that trait

pub mod backend;
pub mod error;
pub mod openai;

pub use backend::{LlmBackend, LlmMessage, LlmRequest, LlmResponse, MessageRole, TokenUsage};
pub use error::LlmError;
pub use openai::{OpenAiBackend, OpenAiConfig};
