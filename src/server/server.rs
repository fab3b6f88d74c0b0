//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::ai::AiClient;
use crate::core::rate_limiter::RateLimiter;
use crate::server::middleware::RateLimitMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use crate::utils::identity;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        identity::init_operator_email(&config.gateway.official_email);

        let limiter = RateLimiter::new(config.gateway.rate_limit.clone());
        let ai = AiClient::new(config.gateway.ai.clone())?;
        let state = AppState::new(config.gateway.clone(), limiter, ai);

        Ok(Self {
            config: config.gateway.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub(crate) fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<
                impl actix_web::body::MessageBody<Error = impl Into<actix_web::Error>>,
            >,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        // Malformed JSON bodies get the same 400 envelope as any other
        // validation failure
        let json_config = web::JsonConfig::default().error_handler(|_err, _req| {
            GatewayError::InvalidRequest("Invalid JSON in request body".to_string()).into()
        });

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(RateLimitMiddleware)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "mathops-gateway")))
            .configure(routes::process::configure_routes)
            .configure(routes::health::configure_routes)
            .default_service(web::route().to(routes::not_found))
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);
        let workers = self.config.workers;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| {
                GatewayError::Config(format!("Failed to bind {}: {}", bind_addr, e))
            })?;

        if let Some(workers) = workers {
            server = server.workers(workers);
        }

        info!("HTTP server listening on {}", bind_addr);
        server.run().await?;
        Ok(())
    }
}
