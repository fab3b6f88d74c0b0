//! Core gateway logic
//!
//! Pure math operations, the per-client rate limiter, the external AI
//! client, and the request dispatcher.

pub mod ai;
pub mod dispatch;
pub mod math;
pub mod rate_limiter;
