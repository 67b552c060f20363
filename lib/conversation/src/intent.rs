//! Keyword intent cascade.
//!
//! Rules are checked in a fixed order against the trimmed, lower-cased text
//! of the latest message and the first match wins. Matching is plain
//! substring search.

use crate::state::ConversationState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phrase that opens the stylist sub-dialogue.
pub const STYLIST_TRIGGER: &str = "can you be my personal stylist";

const WEATHER_KEYWORD: &str = "weather";
const NOW_KEYWORD: &str = "now";
const HEALTH_KEYWORDS: [&str; 2] = ["health", "fitness"];

/// What a turn is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// "weather" together with "now".
    CurrentWeather,
    /// "weather" without "now".
    PastWeather,
    /// The stylist trigger phrase.
    StylistActivation,
    /// Any text while a fashion question is pending.
    FashionAnswer,
    /// "health" or "fitness".
    HealthActivation,
    /// Any text while a health question is pending.
    HealthAnswer,
    /// Nothing matched; hand over to the language model.
    ChitChat,
}

impl Intent {
    /// Resolves the intent of `text` given the pending state.
    ///
    /// `stylist_enabled` switches the stylist trigger on or off.
    #[must_use]
    pub fn resolve(text: &str, state: &ConversationState, stylist_enabled: bool) -> Self {
        if text.contains(WEATHER_KEYWORD) {
            return if text.contains(NOW_KEYWORD) {
                Self::CurrentWeather
            } else {
                Self::PastWeather
            };
        }
        if stylist_enabled && text.contains(STYLIST_TRIGGER) {
            return Self::StylistActivation;
        }
        if state.asking_preference() {
            return Self::FashionAnswer;
        }
        if HEALTH_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
            return Self::HealthActivation;
        }
        if state.asking_health_condition() {
            return Self::HealthAnswer;
        }
        Self::ChitChat
    }

    /// Short name for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentWeather => "current_weather",
            Self::PastWeather => "past_weather",
            Self::StylistActivation => "stylist_activation",
            Self::FashionAnswer => "fashion_answer",
            Self::HealthActivation => "health_activation",
            Self::HealthAnswer => "health_answer",
            Self::ChitChat => "chit_chat",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
