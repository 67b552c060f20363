//! Dialogue router.
//!
//! One call per incoming user turn: normalize the state, resolve the intent
//! of the latest message, produce a reply and the state to carry forward.
//! Routing never fails. Upstream failures become apology text.

use crate::extract;
use crate::intent::Intent;
use crate::message::Message;
use crate::reply;
use crate::state::{ConversationState, DialogueMode};
use crate::tips;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use talking_bot_ai::{LlmBackend, LlmRequest};
use talking_bot_weather::WeatherService;
use tracing::{debug, error, instrument};

/// Router behavior switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Whether the stylist trigger phrase opens the fashion sub-dialogue.
    /// Off gives the weather-and-chat-only bot.
    #[serde(default = "default_stylist_enabled")]
    pub stylist_enabled: bool,
    /// Model requested for chit-chat. `None` uses the backend's model.
    #[serde(default)]
    pub model: Option<String>,
    /// System prompt for chit-chat.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_stylist_enabled() -> bool {
    true
}

fn default_system_prompt() -> String {
    reply::CHAT_SYSTEM_PROMPT.to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            stylist_enabled: default_stylist_enabled(),
            model: None,
            system_prompt: default_system_prompt(),
        }
    }
}

/// The outcome of one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Reply text for the user.
    pub response: String,
    /// State the host must hand back on the next turn.
    pub state: ConversationState,
}

/// Routes turns to weather lookups, canned tips, or chit-chat.
#[derive(Clone)]
pub struct DialogueRouter {
    llm: Arc<dyn LlmBackend>,
    weather: Arc<dyn WeatherService>,
    config: RouterConfig,
}

impl DialogueRouter {
    /// Creates a router over the given services.
    #[must_use]
    pub fn new(
        llm: Arc<dyn LlmBackend>,
        weather: Arc<dyn WeatherService>,
        config: RouterConfig,
    ) -> Self {
        Self {
            llm,
            weather,
            config,
        }
    }

    /// Returns the router configuration.
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Handles one turn.
    ///
    /// Only the last message of `history` is inspected for intent; the
    /// whole history goes to the language model on fallback.
    #[instrument(skip_all, fields(history = history.len()))]
    pub async fn route(&self, history: &[Message], state: Option<ConversationState>) -> Turn {
        let mut state = ConversationState::advance(state);
        let text = history
            .last()
            .map(|m| m.content.trim().to_lowercase())
            .unwrap_or_default();

        let intent = Intent::resolve(&text, &state, self.config.stylist_enabled);
        debug!(%intent, counter = state.counter, "resolved intent");

        let response = match intent {
            Intent::CurrentWeather => self.current_weather(&text).await,
            Intent::PastWeather => self.past_weather(&text).await,
            Intent::StylistActivation => {
                state.mode = DialogueMode::AwaitingFashionAnswer;
                reply::ASK_FAVORITE_COLOR.to_string()
            }
            Intent::FashionAnswer => {
                state.mode = DialogueMode::Idle;
                state.fashion_tip_given = true;
                tips::pick_fashion_tip().to_string()
            }
            Intent::HealthActivation => {
                state.mode = DialogueMode::AwaitingHealthAnswer;
                reply::ASK_HEALTH_FOCUS.to_string()
            }
            Intent::HealthAnswer => {
                state.mode = DialogueMode::Idle;
                tips::pick_health_tip().to_string()
            }
            Intent::ChitChat => {
                state.fashion_tip_given = false;
                self.chit_chat(history).await
            }
        };

        Turn { response, state }
    }

    async fn current_weather(&self, text: &str) -> String {
        let Some(location) = extract::location(text) else {
            return reply::ASK_LOCATION.to_string();
        };

        match self.weather.current_weather(&location).await {
            Ok(current) => current.to_string(),
            Err(e) => {
                debug!(error = %e, %location, "current weather unavailable");
                reply::current_weather_failed(&location)
            }
        }
    }

    async fn past_weather(&self, text: &str) -> String {
        let Some(days_ago) = extract::days_ago(text) else {
            return reply::ASK_DAYS.to_string();
        };
        let Some(location) = extract::location(text) else {
            return reply::ASK_LOCATION.to_string();
        };

        match self.weather.past_days_weather(&location, days_ago).await {
            Ok(past) => past.to_string(),
            Err(e) => {
                debug!(error = %e, %location, days_ago, "past weather unavailable");
                reply::past_weather_failed(days_ago, &location)
            }
        }
    }

    async fn chit_chat(&self, history: &[Message]) -> String {
        let mut request = LlmRequest::new(history.iter().map(Message::to_llm).collect())
            .with_system(self.config.system_prompt.clone());
        if let Some(model) = &self.config.model {
            request = request.with_model(model.clone());
        }

        match self.llm.generate(&request).await {
            Ok(completion) => completion.content,
            Err(e) => {
                error!(error = %e, model = self.llm.model(), "chit-chat completion failed");
                reply::CHAT_UNAVAILABLE.to_string()
            }
        }
    }
}
