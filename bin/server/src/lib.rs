//! HTTP host for the talking-bot dialogue router.
//!
//! Exposes a single stateless turn endpoint. The caller keeps the message
//! history and the conversation state and sends both with every turn.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::StartupError;
pub use routes::{AppState, ChatRequest, ChatResponse, app};
