use crate::utils::error::{GalleryError, Result};
use crate::utils::validation::{validate_listen_addr, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const NOTION_TOKEN_VAR: &str = "NOTION_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gallery-feed")]
#[command(about = "HTTP gallery feed rendered from a Notion database")]
pub struct ServerConfig {
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub listen_addr: String,

    #[arg(long, default_value = "https://api.notion.com")]
    pub notion_api_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log in JSON format (for log collectors)")]
    pub json_logs: bool,
}

impl ServerConfig {
    /// The process-wide upstream credential. Read once at startup; requests
    /// cannot succeed without it, so a missing variable is a startup error.
    pub fn notion_token() -> Result<String> {
        match std::env::var(NOTION_TOKEN_VAR) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(GalleryError::ConfigError {
                message: format!("{} environment variable is not set", NOTION_TOKEN_VAR),
            }),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_listen_addr("listen_addr", &self.listen_addr)?;
        validate_url("notion_api_url", &self.notion_api_url)?;
        Ok(())
    }
}
