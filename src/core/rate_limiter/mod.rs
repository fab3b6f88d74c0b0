//! Per-client rate limiting
//!
//! Token-bucket rate limiting keyed by client identity, with lazy eviction
//! of idle budgets to bound memory.

mod limiter;
mod types;


// Re-export public types
pub use limiter::RateLimiter;
pub use types::RateLimitDecision;
