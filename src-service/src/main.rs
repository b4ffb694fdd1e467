use clap::Parser;
use tracing_subscriber::prelude::*;

use storefront_service::{start, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::parse();
    let service = start(&config).await?;
    service.handle.await??;
    Ok(())
}
