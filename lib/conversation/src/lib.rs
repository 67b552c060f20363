//! Dialogue routing for talking-bot.
//!
//! This crate provides:
//!
//! - **Messages**: the conversation history supplied by the host
//! - **Conversation state**: the small bag carried between turns
//! - **Extractors**: location and day-offset parsing from raw text
//! - **Intent cascade**: keyword rules deciding what a turn is about
//! - **Tips**: canned fashion and health advice
//! - **Dialogue router**: turns history plus state into a reply and the
//!   next state

pub mod extract;
pub mod intent;
pub mod message;
pub mod reply;
pub mod router;
pub mod state;
pub mod tips;

pub use intent::Intent;
pub use message::{Message, MessageRole};
pub use router::{DialogueRouter, RouterConfig, Turn};
pub use state::{ConversationState, DialogueMode};
