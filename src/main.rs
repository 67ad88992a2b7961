use models::{CliApp, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cache;
mod cli;
mod config;
mod models;
mod nps;
mod places;

use config::{load_config, Config};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet, so this goes straight to stderr.
            eprintln!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("park_scout={}", config.logging.level).parse()?),
        )
        .init();

    // Create output directory
    tokio::fs::create_dir_all(&config.output.directory).await?;

    info!("Starting Park Scout with cache file {}", config.cache.file);
    let app = CliApp::new(config)?;

    // Add graceful shutdown
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}
