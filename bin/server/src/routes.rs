//! HTTP routes.
//!
//! The server is stateless: every `/chat` request carries the full message
//! history and the state bag returned by the previous turn.

use axum::{Json, Router, extract::State, routing::get, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use talking_bot_conversation::{ConversationState, DialogueRouter, Message};
use talking_bot_core::ConversationId;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, instrument};

/// Shared application state.
pub struct AppState {
    /// The dialogue router shared by all requests.
    pub router: DialogueRouter,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(router: DialogueRouter) -> Self {
        Self { router }
    }
}

/// Body of a `/chat` request.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Correlates turns in logs. Assigned on the first turn when absent.
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
    /// Conversation so far, oldest first.
    #[serde(default)]
    pub message_history: Vec<Message>,
    /// State bag from the previous turn. Absent, null or malformed starts a
    /// new conversation.
    #[serde(default)]
    pub state: Option<JsonValue>,
}

/// Body of a `/chat` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Id to send back with the next turn.
    pub conversation_id: ConversationId,
    /// Reply text.
    pub response: String,
    /// State to send back with the next turn.
    pub state: ConversationState,
}

/// Builds the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handles one conversation turn.
#[instrument(skip_all, fields(conversation_id))]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let conversation_id = request.conversation_id.unwrap_or_default();
    Span::current().record("conversation_id", tracing::field::display(conversation_id));

    let previous = ConversationState::from_bag(request.state);
    let turn = state.router.route(&request.message_history, previous).await;
    info!(counter = turn.state.counter, "turn handled");

    Json(ChatResponse {
        conversation_id,
        response: turn.response,
        state: turn.state,
    })
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use chrono::{DateTime, Utc};
    use talking_bot_ai::{LlmBackend, LlmError, LlmRequest, LlmResponse, TokenUsage};
    use talking_bot_conversation::{DialogueMode, RouterConfig};
    use talking_bot_core::Result;
    use talking_bot_weather::{
        Coordinates, CurrentWeather, HourlyObservation, WeatherError, WeatherService,
    };
    use tower::ServiceExt;

    struct EchoLlm;

    #[async_trait]
    impl LlmBackend for EchoLlm {
        async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
            let last = request
                .messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default();
            Ok(LlmResponse {
                content: format!("you said: {last}"),
                model: "echo".to_string(),
                usage: TokenUsage::default(),
            })
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    struct SunnyWeather;

    #[async_trait]
    impl WeatherService for SunnyWeather {
        async fn current_weather(&self, location: &str) -> Result<CurrentWeather, WeatherError> {
            Ok(CurrentWeather {
                location: location.to_string(),
                description: "sunny".to_string(),
                temperature: 25.0,
            })
        }

        async fn coordinates(&self, _location: &str) -> Result<Coordinates, WeatherError> {
            Err(WeatherError::MissingField { field: "coord" }.into())
        }

        async fn hourly_history(
            &self,
            _coordinates: Coordinates,
            _at: DateTime<Utc>,
        ) -> Result<Vec<HourlyObservation>, WeatherError> {
            Ok(Vec::new())
        }
    }

    fn test_app() -> Router {
        let router = DialogueRouter::new(
            Arc::new(EchoLlm),
            Arc::new(SunnyWeather),
            RouterConfig::default(),
        );
        app(Arc::new(AppState::new(router)))
    }

    async fn post_chat(body: JsonValue) -> (StatusCode, JsonValue) {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        let response = test_app().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request");
        let response = test_app().oneshot(request).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn first_turn_without_state() {
        let (status, body) = post_chat(serde_json::json!({
            "message_history": [{"role": "user", "content": "hello"}]
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "you said: hello");
        assert_eq!(body["state"]["counter"], 0);
        assert_eq!(body["state"]["mode"], "idle");
        let id = body["conversation_id"].as_str().expect("conversation id");
        assert!(id.parse::<ConversationId>().is_ok());
    }

    #[tokio::test]
    async fn conversation_id_is_echoed() {
        let id = ConversationId::new();
        let (_, body) = post_chat(serde_json::json!({
            "conversation_id": id.as_ulid().to_string(),
            "message_history": [{"role": "user", "content": "hi"}]
        }))
        .await;

        assert_eq!(body["conversation_id"], id.as_ulid().to_string());
    }

    #[tokio::test]
    async fn state_round_trips_through_the_client() {
        let (_, first) = post_chat(serde_json::json!({
            "message_history": [{"role": "user", "content": "can you be my personal stylist"}],
            "state": null
        }))
        .await;
        assert_eq!(first["state"]["mode"], "awaiting_fashion_answer");

        let (_, second) = post_chat(serde_json::json!({
            "message_history": [
                {"role": "user", "content": "can you be my personal stylist"},
                {"role": "assistant", "content": first["response"]},
                {"role": "user", "content": "red"}
            ],
            "state": first["state"]
        }))
        .await;

        let state: ConversationState =
            serde_json::from_value(second["state"].clone()).expect("state");
        assert_eq!(state.counter, 1);
        assert_eq!(state.mode, DialogueMode::Idle);
        assert!(state.fashion_tip_given);
    }

    #[tokio::test]
    async fn malformed_state_starts_over() {
        let (status, body) = post_chat(serde_json::json!({
            "message_history": [{"role": "user", "content": "weather in lisbon now"}],
            "state": {"mode": "idle"}
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["response"],
            "Current weather in lisbon now: sunny. Temperature: 25°C"
        );
        assert_eq!(body["state"]["counter"], 0);
    }

    #[tokio::test]
    async fn invalid_json_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .expect("request");
        let response = test_app().oneshot(request).await.expect("response");

        assert!(response.status().is_client_error());
    }
}
