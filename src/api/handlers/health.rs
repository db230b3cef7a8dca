//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Both tables readable
/// - **503 Service Unavailable**: A table could not be read
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "users": { "status": "ok", "rows": 11 },
///     "logs": { "status": "ok", "rows": 0 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let users = match state.user_service.count().await {
        Ok(rows) => CheckStatus::ok(rows),
        Err(e) => CheckStatus::error(format!("User table error: {e}")),
    };

    let logs = match state.log_service.count().await {
        Ok(rows) => CheckStatus::ok(rows),
        Err(e) => CheckStatus::error(format!("Log table error: {e}")),
    };

    let all_healthy = users.is_ok() && logs.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { users, logs },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
