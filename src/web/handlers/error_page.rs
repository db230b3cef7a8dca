//! Error page rendered for failed lookups and unexpected errors.

use askama::Template;
use askama_web::WebTemplate;
use serde_json::json;

use crate::error::AppError;

/// Template for the error page.
///
/// Rendered by [`AppError`]'s `IntoResponse` implementation, so handlers only
/// need to return the error.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
}

/// Renders the error page for unknown routes.
pub async fn fallback_handler() -> AppError {
    AppError::not_found("Page not found", json!({}))
}
