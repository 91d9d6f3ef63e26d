use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use wellness_service::{AppState, ServiceSettings, router};

/// Parse the listen address, falling back to `127.0.0.1:3000`.
fn listen_addr(raw: &str) -> SocketAddr {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(%raw, "invalid ADDRESS, using 127.0.0.1:3000");
        SocketAddr::from(([127, 0, 0, 1], 3000))
    })
}


#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Configure logging from env var `WELLNESS_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("WELLNESS_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!(%log_env, "wellness-server: log filter");

    let handle = PrometheusBuilder::new().install_recorder()?;

    let settings = ServiceSettings::from_env();
    let addr = listen_addr(&settings.address);
    let max_body_size = settings.max_body_size;
    let state = AppState::from_env(settings).with_metrics(handle);
    let app = router(state.into_shared());

    info!(%addr, max_body_bytes = max_body_size, "starting HTTP server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, app.into_make_service());
    if let Err(e) = server
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
        })
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
