use std::sync::Arc;

use anyhow::Context;
use chatbot_server::{
    config::Config,
    routes,
    services::{email_store::EmailStore, gemini::GeminiClient},
    state::AppState,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    if config.api_key.is_none() {
        warn!("GENAI_API_KEY is not set; chat replies will report the missing key");
    }

    let store = EmailStore::open(&config.database_path)
        .with_context(|| format!("opening {}", config.database_path.display()))?;

    let model = GeminiClient::new(
        config.api_key.clone(),
        config.base_url.clone(),
        config.model.clone(),
        config.request_timeout,
    )?;
    info!(model = model.model(), "conversation client ready");

    let state = Arc::new(AppState::new(store, Arc::new(model)));
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!("chatbot server listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
