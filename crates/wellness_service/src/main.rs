//! One lab-results sync pass, meant to be run from cron every 6 hours.
//! Prints the JSON report on stdout and exits non-zero when the pass fails.

use wellness_service::{AppState, ServiceSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from env var `WELLNESS_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("WELLNESS_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("wellness-sync: log filter: {}", log_env);

    let state = AppState::from_env(ServiceSettings::from_env());
    let report = state.lab_sync()?.run().await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
