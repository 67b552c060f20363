//! Strongly-typed identifiers.
//!
//! Ids wrap a ULID so that messages recorded in the same conversation sort
//! by creation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when an id string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The id type that failed to parse.
    pub id_type: &'static str,
    /// Why parsing failed.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Ulid);

        impl $name {
            /// Generates a fresh id.
            #[must_use]
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// Returns the underlying ULID.
            #[must_use]
            pub const fn as_ulid(&self) -> Ulid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.strip_prefix(concat!($prefix, "_")).unwrap_or(s);
                Ulid::from_str(raw).map(Self).map_err(|e| ParseIdError {
                    id_type: stringify!($name),
                    reason: e.to_string(),
                })
            }
        }
    };
}

define_id!(
    /// Identifies a single message in a conversation history.
    MessageId,
    "msg"
);

define_id!(
    /// Identifies a conversation carried by the hosting client.
    ConversationId,
    "conv"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_id_display_prefix() {
        assert!(MessageId::new().to_string().starts_with("msg_"));
    }

    #[test]
    fn conversation_id_parses_prefixed_and_raw() {
        let id = ConversationId::new();
        let prefixed: ConversationId = id.to_string().parse().expect("prefixed");
        let raw: ConversationId = id.as_ulid().to_string().parse().expect("raw");
        assert_eq!(prefixed, id);
        assert_eq!(raw, id);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "msg_not-a-ulid".parse::<MessageId>().unwrap_err();
        assert_eq!(err.id_type, "MessageId");
    }

    #[test]
    fn ids_are_serialized_as_bare_ulids() {
        let id = MessageId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.as_ulid()));
    }
}
