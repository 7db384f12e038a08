// src/main.rs
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use liveness_probe::{
    config::{self, Config},
    health::LivenessChecker,
    report::ConsoleReporter,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("liveness_probe=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(config_path) => {
            info!("Loading configuration from: {}", config_path);
            config::load_config(&config_path).await?
        }
        None => Config::default(),
    };

    let checker = LivenessChecker::from_config(&config, Arc::new(ConsoleReporter::new()))
        .context("Failed to initialize liveness checker")?;

    // Classification and transport failures are reported, not returned
    let result = checker.check(&config.target).await;
    info!("Check finished, success: {}", result.is_success());

    Ok(())
}
