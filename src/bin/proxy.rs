use anyhow::Context;
use linguascope::app_state::AppState;
use linguascope::config::{Config, ENV_API_KEY};
use linguascope::llm::GeminiTransport;
use linguascope::ops::{GeminiOps, ModelCatalog};
use linguascope::proxy;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    if config.api_key().is_empty() {
        anyhow::bail!("{ENV_API_KEY} must be set for the proxy to serve provider calls");
    }

    let transport = Arc::new(GeminiTransport::new(
        config.gemini_base_url(),
        config.api_key(),
    ));
    let ops = GeminiOps::new(
        transport,
        ModelCatalog::from_config(&config),
        config.target_language(),
    );
    let app = proxy::router(AppState::new(Arc::new(ops)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(addr = config.bind_addr(), "proxy listening");
    axum::serve(listener, app).await?;
    Ok(())
}
