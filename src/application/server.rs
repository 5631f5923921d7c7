use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::application::routes::app_router;
use crate::application::state::{AppState, AppStateConfig};
use crate::infrastructure::credentials::Credentials;
use crate::infrastructure::endpoints::Endpoints;
use crate::infrastructure::http::build_client;

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub endpoints: Endpoints,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let http = build_client().context("failed to build HTTP client")?;

    let credentials = Credentials::from_env();
    info!(
        serpapi_keys = credentials.serpapi.len(),
        youtube_keys = credentials.youtube.len(),
        news_keys = credentials.news.len(),
        reddit_user_agents = credentials.reddit_user_agent.len(),
        "loaded feedback credentials"
    );

    let state = AppState::new(
        &http,
        AppStateConfig {
            endpoints: config.endpoints,
            credentials,
            ..AppStateConfig::default()
        },
    );

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let app = app_router(state);

    info!(address = %config.bind_address, "starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
