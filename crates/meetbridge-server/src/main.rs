//! meetbridge server entry point.

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use meetbridge_server::{AppState, ServerConfig, app};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before reading configuration; missing file is fine.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> std::io::Result<()> {
    let config = ServerConfig::from_env();
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port()));

    let state = AppState::new(config);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("meetbridge listening on http://{}", addr);

    axum::serve(listener, router).await
}
