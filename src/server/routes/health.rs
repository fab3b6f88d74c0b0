//! Health check endpoint

use crate::server::routes::{ApiResponse, method_not_allowed};
use actix_web::{HttpResponse, web};
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .default_service(web::route().to(method_not_allowed)),
    );
}

/// Basic health check endpoint
///
/// Used by load balancers and monitoring systems; returns the envelope
/// without a `data` field.
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");
    HttpResponse::Ok().json(ApiResponse::health())
}
