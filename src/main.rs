use anyhow::Result;
use careerfit_rust::{config, server};
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<tracing_subscriber::filter::LevelFilter> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first so its log level can seed the subscriber
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let level_filter = match validate_log_level(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level_filter.to_string())),
        )
        .json()
        .init();

    info!("Starting CareerFit server with log level: {}", log_level);
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}
