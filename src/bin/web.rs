use anyhow::{Context, Result};
use sleeper_matchups::config::AppConfig;
use sleeper_matchups::server::{router, AppState};
use sleeper_matchups::MatchupService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (and .env) first so RUST_LOG from .env applies
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let service = MatchupService::from_config(&config)?;
    let app = router(AppState::new(service));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(%address, league_api = %config.league_api_base_url, "starting web server");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
