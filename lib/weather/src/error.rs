//! Error types for the weather crate.
//!
//! Every weather operation returns `WeatherError` wrapped in a rootcause
//! `Report`. Callers turn the failure into a user-facing apology; nothing
//! here is fatal.

use std::fmt;

/// Errors from weather service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherError {
    /// The HTTP request could not be completed.
    RequestFailed { reason: String },
    /// The response body was not the JSON shape we expected.
    MalformedResponse { reason: String },
    /// The response parsed but lacked a required key.
    MissingField { field: &'static str },
    /// The query itself cannot be expressed.
    InvalidRequest { reason: String },
    /// Invalid client configuration.
    InvalidConfig { reason: String },
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { reason } => {
                write!(f, "weather request failed: {reason}")
            }
            Self::MalformedResponse { reason } => {
                write!(f, "malformed weather response: {reason}")
            }
            Self::MissingField { field } => {
                write!(f, "weather response is missing '{field}'")
            }
            Self::InvalidRequest { reason } => {
                write!(f, "invalid weather request: {reason}")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid weather configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for WeatherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_key() {
        let err = WeatherError::MissingField { field: "main" };
        assert_eq!(err.to_string(), "weather response is missing 'main'");
    }

    #[test]
    fn request_failed_carries_reason() {
        let err = WeatherError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }
}
