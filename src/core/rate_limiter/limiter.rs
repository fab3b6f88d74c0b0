//! Core rate limiter implementation

use super::types::{ClientBudget, RateLimitDecision};
use crate::config::RateLimitConfig;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Budget map plus prune bookkeeping, guarded by a single lock so eviction
/// can never race a live decrement.
struct Ledger {
    budgets: HashMap<String, ClientBudget>,
    last_prune: Instant,
}

/// Token-bucket rate limiter keyed by client identity
///
/// Each client gets a bucket of `requests_per_minute` tokens, refilled to
/// full capacity once per rolling window. Budgets idle beyond the configured
/// TTL are evicted lazily on the admission path.
pub struct RateLimiter {
    config: RateLimitConfig,
    ledger: Arc<RwLock<Ledger>>,
    window: Duration,
    idle_ttl: Duration,
}

impl RateLimiter {
    /// Create a new rate limiter with the standard one-minute window
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_window(config, Duration::from_secs(60))
    }

    /// Create a rate limiter with a custom window
    pub fn with_window(config: RateLimitConfig, window: Duration) -> Self {
        let idle_ttl = Duration::from_secs(config.idle_ttl_secs);
        Self {
            config,
            ledger: Arc::new(RwLock::new(Ledger {
                budgets: HashMap::new(),
                last_prune: Instant::now(),
            })),
            window,
            idle_ttl,
        }
    }

    /// Atomically admit or reject a request for `key`
    ///
    /// Refill, decrement, and idle eviction all happen under one write-lock
    /// acquisition, so concurrent admissions for the same client cannot lose
    /// updates.
    pub async fn check_and_record(&self, key: &str) -> RateLimitDecision {
        let capacity = self.config.requests_per_minute;
        if !self.config.enabled {
            return RateLimitDecision {
                allowed: true,
                remaining: capacity,
                retry_after_secs: None,
            };
        }

        let now = Instant::now();
        let mut ledger = self.ledger.write().await;

        // Lazy eviction of idle budgets, at most once per window
        if now.duration_since(ledger.last_prune) >= self.window {
            let idle_ttl = self.idle_ttl;
            ledger
                .budgets
                .retain(|_, b| now.duration_since(b.last_seen) <= idle_ttl);
            ledger.last_prune = now;
        }

        let entry = ledger
            .budgets
            .entry(key.to_string())
            .or_insert_with(|| ClientBudget::new(capacity, now));

        // Full refill once per rolling window
        if now.duration_since(entry.window_start) >= self.window {
            entry.tokens = capacity;
            entry.window_start = now;
        }
        entry.last_seen = now;

        let allowed = entry.tokens > 0;
        if allowed {
            entry.tokens -= 1;
        }
        let remaining = entry.tokens;

        let retry_after_secs = if allowed {
            None
        } else {
            debug!("Rate limit exceeded for {}: 0/{} tokens", key, capacity);
            let elapsed = now.duration_since(entry.window_start);
            Some(self.window.saturating_sub(elapsed).as_secs().max(1))
        };

        RateLimitDecision {
            allowed,
            remaining,
            retry_after_secs,
        }
    }

    /// Evict budgets idle beyond the TTL
    pub async fn prune_idle(&self) {
        let now = Instant::now();
        let mut ledger = self.ledger.write().await;
        let idle_ttl = self.idle_ttl;
        ledger
            .budgets
            .retain(|_, b| now.duration_since(b.last_seen) <= idle_ttl);
        ledger.last_prune = now;
    }

    /// Number of clients currently tracked
    pub async fn tracked_clients(&self) -> usize {
        self.ledger.read().await.budgets.len()
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get the configured bucket capacity
    pub fn capacity(&self) -> u32 {
        self.config.requests_per_minute
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            ledger: self.ledger.clone(),
            window: self.window,
            idle_ttl: self.idle_ttl,
        }
    }
}
