//! Request processing endpoint
//!
//! `POST /process` accepts a JSON object with exactly one functional key
//! and routes it through the dispatcher.

use crate::core::dispatch::{self, Operation};
use crate::server::routes::{ApiResponse, method_not_allowed};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use serde_json::Value;

/// Configure processing routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/process")
            .route(web::post().to(process))
            .default_service(web::route().to(method_not_allowed)),
    );
}

/// Process exactly one of: fibonacci, prime, lcm, hcf, AI
pub async fn process(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    let operation = Operation::from_value(&body)?;
    let result = dispatch::execute(operation, &state.ai).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
}
