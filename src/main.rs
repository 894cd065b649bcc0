use anyhow::Context;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing::{info, warn};

use domain_roaster::{
    api::{self, AppState},
    metrics, Config, DomainAnalyzer, WindowedRateLimiter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "domain_roaster=info,tower_http=debug".into()),
        )
        .init();

    // Load configuration
    let config = Arc::new(Config::load().context("failed to load configuration")?);
    info!("Configuration loaded successfully");

    // Initialize services
    let analyzer = Arc::new(
        DomainAnalyzer::from_config(config.clone()).context("failed to build domain analyzer")?,
    );
    let rate_limiter = Arc::new(WindowedRateLimiter::new(
        config.rate_limit_requests,
        Duration::from_secs(config.rate_limit_window_seconds),
    ));

    // Initialize metrics
    metrics::init_metrics();

    let app = api::router(AppState {
        analyzer,
        rate_limiter,
        config: config.clone(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Domain roaster listening on {}", addr);
    info!("Health check: http://{}/health", addr);
    info!("Metrics: http://{}/metrics", addr);

    // Graceful shutdown handling
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, gracefully shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context("server error")?;

    Ok(())
}
