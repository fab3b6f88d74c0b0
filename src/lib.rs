//! # mathops-gateway
//!
//! A small HTTP gateway exposing a handful of stateless mathematical
//! operations (Fibonacci series, prime filtering, LCM/HCF) plus a
//! pass-through to a Gemini-style completion endpoint for single-word
//! question answering, guarded by per-client IP rate limiting.
//!
//! ## Endpoints
//!
//! - `POST /process` — body is a JSON object with exactly one of the keys
//!   `fibonacci`, `prime`, `lcm`, `hcf`, `AI`
//! - `GET /health` — liveness check
//!
//! Every response, success or failure, uses the same three-field envelope:
//!
//! ```json
//! {"is_success": true, "official_email": "ops@example.com", "data": [0, 1, 1, 2]}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mathops_gateway::config::Config;
//! use mathops_gateway::server::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     HttpServer::new(&config)?.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};
