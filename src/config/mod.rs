//! Configuration management for the gateway
//!
//! This module handles loading and validation of all gateway configuration.
//! Configuration is supplied at process start and immutable thereafter.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let gateway = GatewayConfig::from_env()?;
        let config = Self { gateway };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get AI endpoint configuration
    pub fn ai(&self) -> &AiConfig {
        &self.gateway.ai
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if self.gateway.server.port == 0 {
            return Err(GatewayError::Config(
                "Server port must be non-zero".to_string(),
            ));
        }

        if self.gateway.rate_limit.enabled && self.gateway.rate_limit.requests_per_minute == 0 {
            return Err(GatewayError::Config(
                "Rate limit requests_per_minute must be non-zero when rate limiting is enabled"
                    .to_string(),
            ));
        }

        if self.gateway.official_email.is_empty() {
            return Err(GatewayError::Config(
                "official_email must be set".to_string(),
            ));
        }

        if self.gateway.ai.api_url.is_empty() {
            return Err(GatewayError::Config("AI api_url must be set".to_string()));
        }

        Ok(())
    }
}
