//! Rate limiter types and data structures

use std::time::Instant;

/// Outcome of an admission check
#[derive(Debug, Clone)]
pub struct RateLimitDecision {
    /// Whether the request is admitted
    pub allowed: bool,
    /// Tokens left in the client's bucket after this check
    pub remaining: u32,
    /// Seconds until the bucket refills (only set when rejected)
    pub retry_after_secs: Option<u64>,
}

/// Per-client token budget
///
/// Invariant: `tokens` stays within `[0, capacity]`.
#[derive(Debug, Clone)]
pub(super) struct ClientBudget {
    /// Tokens left in the current window
    pub(super) tokens: u32,
    /// Start of the window the bucket was last refilled in
    pub(super) window_start: Instant,
    /// Last admission attempt, used for idle eviction
    pub(super) last_seen: Instant,
}

impl ClientBudget {
    pub(super) fn new(capacity: u32, now: Instant) -> Self {
        Self {
            tokens: capacity,
            window_start: now,
            last_seen: now,
        }
    }
}
