use std::sync::Arc;

use anyhow::Context;
use sensetheworld_chat::{
    config::Config,
    routes,
    services::gemini::GeminiClient,
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(key = %config.key_prefix(), "Loaded Gemini key");

    let model = GeminiClient::new(config.gemini_api_key.clone())
        .context("failed to build Gemini client")?;
    let state = Arc::new(AppState::new(Arc::new(model)));

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "SenseTheWorld+ Chat API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
