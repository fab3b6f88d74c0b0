//! HTTP route modules
//!
//! This module contains the route handlers and the uniform response
//! envelope returned for every outcome.

pub mod health;
pub mod process;

use crate::utils::error::GatewayError;
use crate::utils::identity;
use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;

/// Uniform response envelope
///
/// Every outcome, success or failure, is returned in this shape so callers
/// can parse responses without branching on status-specific schemas. `data`
/// holds the operation result on success and a human-readable message on
/// failure; only `/health` omits it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse {
    /// Whether the request was successful
    pub is_success: bool,
    /// Operator identity, fixed at process start
    pub official_email: String,
    /// Result value or error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Create a successful response carrying an operation result
    pub fn success(data: Value) -> Self {
        Self {
            is_success: true,
            official_email: identity::operator_email().to_string(),
            data: Some(data),
        }
    }

    /// Create a failure response carrying a human-readable message
    pub fn failure(message: String) -> Self {
        Self {
            is_success: false,
            official_email: identity::operator_email().to_string(),
            data: Some(Value::String(message)),
        }
    }

    /// Create the two-field health response
    pub fn health() -> Self {
        Self {
            is_success: true,
            official_email: identity::operator_email().to_string(),
            data: None,
        }
    }
}

/// Fallback for unknown paths
pub async fn not_found() -> Result<HttpResponse, GatewayError> {
    Err(GatewayError::NotFound("Endpoint not found".to_string()))
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, GatewayError> {
    Err(GatewayError::MethodNotAllowed(format!(
        "HTTP method {} is not supported for this endpoint",
        req.method()
    )))
}
