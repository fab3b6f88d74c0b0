//! Helper functions for middleware

use actix_web::dev::ServiceRequest;

/// Resolve the client identity used for rate limiting.
///
/// Resolution order: first `X-Forwarded-For` value if present and
/// non-empty, then `X-Real-IP`, then the transport-level peer address.
pub fn resolve_client_ip(req: &ServiceRequest) -> String {
    if let Some(xff) = req.headers().get("x-forwarded-for") {
        if let Ok(value) = xff.to_str() {
            if let Some(first) = value.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }
    }

    if let Some(real_ip) = req.headers().get("x-real-ip") {
        if let Ok(value) = real_ip.to_str() {
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
