//! Configuration models

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Top-level gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// External AI endpoint configuration
    #[serde(default)]
    pub ai: AiConfig,
    /// Operator identity echoed in every response envelope
    #[serde(default)]
    pub official_email: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            rate_limit: RateLimitConfig::default(),
            ai: AiConfig::default(),
            official_email: String::new(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("GATEWAY_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("GATEWAY_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(workers) = env::var("GATEWAY_WORKERS") {
            config.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| GatewayError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }

        // Rate limit configuration
        if let Ok(rpm) = env::var("RATE_LIMIT_RPM") {
            config.rate_limit.requests_per_minute = rpm
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid requests per minute: {}", e)))?;
        }
        if let Ok(ttl) = env::var("RATE_LIMIT_IDLE_TTL_SECS") {
            config.rate_limit.idle_ttl_secs = ttl
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid idle TTL: {}", e)))?;
        }

        // AI endpoint configuration
        if let Ok(url) = env::var("GEMINI_API_URL") {
            config.ai.api_url = url;
        }
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            config.ai.api_key = key;
        }

        // Operator identity
        if let Ok(email) = env::var("OFFICIAL_EMAIL") {
            config.official_email = email;
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Worker thread count (actix default when unset)
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Bucket capacity, refilled once per rolling one-minute window
    #[serde(default = "default_rpm")]
    pub requests_per_minute: u32,
    /// Idle period after which a client's budget is evicted
    #[serde(default = "default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests_per_minute: default_rpm(),
            idle_ttl_secs: default_idle_ttl_secs(),
        }
    }
}

/// External AI endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Completion endpoint URL
    #[serde(default)]
    pub api_url: String,
    /// API key passed as a query parameter
    #[serde(default)]
    pub api_key: String,
    /// Hard deadline for the outbound call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// TCP connect timeout
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Maximum sanitized question length
    #[serde(default = "default_max_question_chars")]
    pub max_question_chars: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_question_chars: default_max_question_chars(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_rpm() -> u32 {
    60
}

fn default_idle_ttl_secs() -> u64 {
    600
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_max_question_chars() -> usize {
    500
}
