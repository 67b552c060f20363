use std::sync::Arc;
use talking_bot_ai::{LlmBackend, OpenAiBackend};
use talking_bot_conversation::DialogueRouter;
use talking_bot_core::Result;
use talking_bot_server::{AppState, ServerConfig, StartupError, app};
use talking_bot_weather::OpenWeatherClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().map_err(|e| StartupError::Config {
        reason: e.to_string(),
    })?;
    tracing::info!("Loaded configuration");

    let llm = OpenAiBackend::new(config.openai).map_err(|e| StartupError::LanguageModel {
        reason: e.to_string(),
    })?;
    let weather = OpenWeatherClient::new(config.weather).map_err(|e| StartupError::Weather {
        reason: e.to_string(),
    })?;
    tracing::info!(
        model = llm.model(),
        stylist_enabled = config.router.stylist_enabled,
        "Dialogue router ready"
    );

    let router = DialogueRouter::new(Arc::new(llm), Arc::new(weather), config.router);
    let app = app(Arc::new(AppState::new(router)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| StartupError::Bind {
            addr: config.bind_addr.clone(),
            reason: e.to_string(),
        })?;

    tracing::info!("listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Serve {
            reason: e.to_string(),
        })?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
