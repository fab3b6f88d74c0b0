//! Application state shared across HTTP handlers

use crate::config::GatewayConfig;
use crate::core::ai::AiClient;
use crate::core::rate_limiter::RateLimiter;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across threads. The
/// limiter's budget map is the only mutable state shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<GatewayConfig>,
    /// Per-client rate limiter
    pub limiter: Arc<RateLimiter>,
    /// External AI client
    pub ai: Arc<AiClient>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: GatewayConfig, limiter: RateLimiter, ai: AiClient) -> Self {
        Self {
            config: Arc::new(config),
            limiter: Arc::new(limiter),
            ai: Arc::new(ai),
        }
    }
}
