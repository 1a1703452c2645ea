use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pollental::models::Location;
use pollental::{PollenApiClient, PollentalConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = PollentalConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    let client = PollenApiClient::new(&config.api.base_url);
    web::run(client, Location::hvidovre(), config.server.port).await;

    Ok(())
}
