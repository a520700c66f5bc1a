use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use video_agent::{app, config::settings::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("Invalid configuration")?;
    let port = config.server_port;
    let state = AppState::from_config(config).context("Failed to build HTTP clients")?;

    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);
    info!("Scheduled jobs are kept in memory only and are not executed automatically");

    axum::serve(listener, app).await?;
    Ok(())
}
