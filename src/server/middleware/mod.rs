//! HTTP middleware

mod helpers;
mod rate_limit;


pub use rate_limit::RateLimitMiddleware;
