//! HTTP handlers for server info, health, and the two operation groups

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use tracing::{debug, info};

use super::error::ApiResult;
use super::types::{HealthStatus, MathRequest, OperationResponse, ServerInfo, TextRequest};
use super::AppState;
use crate::core::{dispatch_math, dispatch_text, MathResult, TextResult};

/// Server metadata and endpoint discovery
pub async fn root_handler(State(state): State<AppState>) -> Json<ServerInfo> {
    Json(state.info.as_ref().clone())
}

/// Health check endpoint
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: chrono::Local::now().to_rfc3339(),
    })
}

/// POST /math - statistics, quadratic, factorial, logarithm, trigonometry, power
pub async fn math_handler(
    payload: Result<Json<MathRequest>, JsonRejection>,
) -> ApiResult<Json<OperationResponse<MathResult>>> {
    let Json(request) = payload?;
    debug!("math request: {} ({} values)", request.operation, request.values.len());

    let result = dispatch_math(&request.operation, &request.params())?;
    info!("math operation completed: {}", request.operation);

    Ok(Json(OperationResponse::ok(request.operation, result)))
}

/// POST /text - analyze, transform, extract
pub async fn text_handler(
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> ApiResult<Json<OperationResponse<TextResult>>> {
    let Json(request) = payload?;
    debug!(
        "text request: {} (mode: {:?}, {} bytes)",
        request.operation,
        request.extraction_type,
        request.text.len()
    );

    let result = dispatch_text(&request.operation, &request.params())?;
    info!("text operation completed: {}", request.operation);

    Ok(Json(OperationResponse::ok(request.operation, result)))
}
