//! Error handling for the gateway
//!
//! This module defines all error types used throughout the gateway and the
//! single place where error kinds are mapped to HTTP status codes. Every
//! error, regardless of kind, is serialized through the same three-field
//! response envelope so callers never have to branch on status-specific
//! schemas.

use crate::server::routes::ApiResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use tracing::error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client-caused validation errors (bad shape, bad math domain,
    /// empty or oversized AI question)
    #[error("{0}")]
    InvalidRequest(String),

    /// Rate limit budget exhausted
    #[error("{0}")]
    RateLimited(String),

    /// Downstream AI failure, including timeout
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Unknown route
    #[error("{0}")]
    NotFound(String),

    /// Wrong HTTP method for a known route
    #[error("{0}")]
    MethodNotAllowed(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Message exposed to the caller in the response envelope.
    ///
    /// Client-facing kinds surface their own message; everything else is
    /// collapsed to a generic message so internal causes never leak.
    fn public_message(&self) -> String {
        match self {
            GatewayError::InvalidRequest(_)
            | GatewayError::RateLimited(_)
            | GatewayError::ServiceUnavailable(_)
            | GatewayError::NotFound(_)
            | GatewayError::MethodNotAllowed(_) => self.to_string(),
            _ => "An internal error occurred. Please try again later.".to_string(),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::Config(_)
            | GatewayError::HttpClient(_)
            | GatewayError::Serialization(_)
            | GatewayError::Yaml(_)
            | GatewayError::Io(_)
            | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Unexpected error: {}", self);
        }
        HttpResponse::build(status).json(ApiResponse::failure(self.public_message()))
    }
}
