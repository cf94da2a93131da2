//! Rubiks Transformation Service
//!
//! Usage: `rubiks-service [port]`. The port argument overrides `RUBIKS_PORT`.

use rubiks_service::{ServiceConfig, TransformServer};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rubiks_vis=info,rubiks_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ServiceConfig::from_env()?;
    if let Some(port) = env::args().nth(1) {
        config.port = port.parse()?;
    }

    tracing::info!(port = config.port, "Starting transformation service");

    TransformServer::new(config).serve().await?;

    Ok(())
}
