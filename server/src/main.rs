#![recursion_limit = "256"]

mod config;
mod routes;
mod state;
mod upstream;

use std::process::ExitCode;

use config::{ConfigError, ServerConfig};
use upstream::{ResearchBackend, UpstreamError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("{0}")]
    Leptos(String),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "paperdesk stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let backend = ResearchBackend::new(&config.research_api_url, config.timeouts)?;
    tracing::info!(
        backend = %backend.base_url(),
        request_timeout_secs = config.timeouts.request_secs,
        "research backend configured"
    );

    let state = state::AppState::new(backend);
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| StartupError::Bind { port, source })?;

    tracing::info!(%port, "paperdesk listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
