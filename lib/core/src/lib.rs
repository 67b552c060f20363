//! Core types and utilities for talking-bot.
//!
//! This crate provides the error handling foundation and the strongly-typed
//! identifiers shared by the conversation, weather and AI crates.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ConversationId, MessageId, ParseIdError};
