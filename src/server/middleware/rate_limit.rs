//! Rate limiting middleware
//!
//! Admits or rejects every inbound request before any business logic runs.
//! Rejections short-circuit with a distinguishable `RateLimited` error so
//! the centralized error mapper returns the dedicated 429 envelope.

use crate::server::middleware::helpers::resolve_client_ip;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::web;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Rate limit middleware for Actix-web
///
/// Pulls the limiter out of [`AppState`]; requests are keyed by resolved
/// client IP.
pub struct RateLimitMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RateLimitMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService { service }))
    }
}

/// Service implementation for rate limit middleware
pub struct RateLimitMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let app_state = req.app_data::<web::Data<AppState>>().cloned();
        let client_ip = resolve_client_ip(&req);
        let start_time = Instant::now();
        let path = req.path().to_string();
        let method = req.method().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            if let Some(state) = &app_state {
                let decision = state.limiter.check_and_record(&client_ip).await;
                if !decision.allowed {
                    warn!("Rate limit exceeded for IP: {}", client_ip);
                    return Err(GatewayError::RateLimited(
                        "Rate limit exceeded. Please try again later.".to_string(),
                    )
                    .into());
                }
                debug!(
                    "Rate limit check passed for {} ({} tokens remaining)",
                    client_ip, decision.remaining
                );
            }

            let res = fut.await?;

            let duration = start_time.elapsed();
            info!(
                "{} {} completed in {:?} with status {}",
                method,
                path,
                duration,
                res.status()
            );

            Ok(res)
        })
    }
}
