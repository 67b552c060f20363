//! Startup errors for the server binary.

use std::fmt;

/// Errors that stop the server from coming up.
#[derive(Debug)]
pub enum StartupError {
    /// Configuration could not be loaded.
    Config { reason: String },
    /// The language-model backend could not be built.
    LanguageModel { reason: String },
    /// The weather client could not be built.
    Weather { reason: String },
    /// The listener could not bind.
    Bind { addr: String, reason: String },
    /// The server stopped with an I/O error.
    Serve { reason: String },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { reason } => write!(f, "failed to load configuration: {}", reason),
            Self::LanguageModel { reason } => {
                write!(f, "failed to set up language model: {}", reason)
            }
            Self::Weather { reason } => write!(f, "failed to set up weather client: {}", reason),
            Self::Bind { addr, reason } => {
                write!(f, "failed to bind to {}: {}", addr, reason)
            }
            Self::Serve { reason } => write!(f, "server error: {}", reason),
        }
    }
}

impl std::error::Error for StartupError {}
