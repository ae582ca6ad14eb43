//! Gateway entry point.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use promptgate_axum::{ServerConfig, start_server};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env for local development; absence is fine in production.
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    start_server(config).await
}
