//! API route configuration.
//!
//! Machine-readable endpoints. The service has no authentication, so these
//! routes are public.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON endpoints.
///
/// # Endpoints
///
/// - `GET /health` - Store status and row counts
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
