use std::sync::Arc;

use clap::Parser;
use gallery_feed::server::{self, AppState};
use gallery_feed::utils::{logger, validation::Validate};
use gallery_feed::{NotionClient, PostSource, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_logger(config.verbose);
    }

    tracing::info!("Starting gallery-feed");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let token = match ServerConfig::notion_token() {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let source: Arc<dyn PostSource> =
        Arc::new(NotionClient::new(config.notion_api_url.clone(), token));
    let state = AppState { source };

    server::run(&config, state).await
}
