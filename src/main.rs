use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tripcraft::api::AppState;
use tripcraft::config::TripCraftConfig;
use tripcraft::datasets::DatasetStore;
use tripcraft::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var("TRIPCRAFT_CONFIG").ok().map(PathBuf::from);
    let config = TripCraftConfig::load_from_path(config_path)?;
    init_logging(&config.logging.level, &config.logging.format);

    tracing::info!("Starting TripCraft {}", tripcraft::VERSION);
    let datasets = DatasetStore::load(&config.datasets)?;

    let state = Arc::new(AppState {
        datasets,
        defaults: config.defaults.clone(),
    });
    web::run(config.server.port, &config.server.static_dir, state).await
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tripcraft={level}")));

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
