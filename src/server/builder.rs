//! Server startup entry point

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use std::path::Path;
use tracing::info;

/// Default config file path, overridable via `GATEWAY_CONFIG`
const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Load configuration and run the server until shutdown
pub async fn run_server() -> Result<()> {
    let config_path =
        std::env::var("GATEWAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config = if Path::new(&config_path).exists() {
        Config::from_file(&config_path).await?
    } else {
        info!(
            "Config file {} not found, loading from environment",
            config_path
        );
        Config::from_env()?
    };

    HttpServer::new(&config)?.start().await
}
