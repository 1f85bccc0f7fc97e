//! # docketd
//!
//! Binary entrypoint. Loads configuration, opens the task store, and
//! serves the API until Ctrl+C or SIGTERM.

use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use dkt_api::identity::IdentityClient;
use dkt_api::middleware::rate_limit::RateLimiter;
use dkt_api::routes;
use dkt_api::state::AppState;
use dkt_config::DocketConfig;
use dkt_db::service::TaskService;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("docketd error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Dotenv runs inside the config load, so DOCKET_LOG from a .env file
    // is visible by the time the subscriber reads it.
    let config = DocketConfig::load_with_dotenv()?;
    init_tracing()?;
    config.validate()?;

    let service = TaskService::open(&config.database.path, config.limits.to_limits())
        .await
        .context("failed to open task database")?;
    let identity = IdentityClient::new(
        &config.auth.base_url,
        Duration::from_secs(config.auth.timeout_secs),
    )
    .context("failed to build identity client")?;
    let limiter = RateLimiter::new(
        Duration::from_secs(config.rate.window_secs),
        config.rate.max_requests,
    );
    let state = AppState::new(service, identity, limiter);
    let app = routes::app(state, &config.server.allowed_origins);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "docketd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("DOCKET_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}
