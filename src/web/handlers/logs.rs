//! Audit log pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::view_models::LogItem;

/// Template for the full log list.
#[derive(Template, WebTemplate)]
#[template(path = "logs/list.html")]
pub struct LogListTemplate {
    pub logs: Vec<LogItem>,
}

/// Template for a single log entry.
#[derive(Template, WebTemplate)]
#[template(path = "logs/view.html")]
pub struct LogViewTemplate {
    pub log: LogItem,
}

/// Fragment listing the logs of one user, without the page layout.
#[derive(Template, WebTemplate)]
#[template(path = "logs/_user_logs.html")]
pub struct UserLogsTemplate {
    pub user_id: i64,
    pub logs: Vec<LogItem>,
}

/// Lists every audit entry.
///
/// # Endpoint
///
/// `GET /logs`
pub async fn list_logs_handler(State(state): State<AppState>) -> Result<LogListTemplate, AppError> {
    let logs = state.log_service.get_all().await?;

    Ok(LogListTemplate {
        logs: logs.into_iter().map(LogItem::from).collect(),
    })
}

/// Shows one audit entry.
///
/// # Endpoint
///
/// `GET /logs/{id}`
///
/// # Errors
///
/// Renders the error page with 404 if the entry does not exist.
pub async fn view_log_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<LogViewTemplate, AppError> {
    let log = state
        .log_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Log not found", json!({ "id": id })))?;

    Ok(LogViewTemplate { log: log.into() })
}

/// Renders the log fragment for one user.
///
/// # Endpoint
///
/// `GET /logs/user/{user_id}`
///
/// Works for deleted users too; an unknown id yields an empty list.
pub async fn user_logs_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<UserLogsTemplate, AppError> {
    let logs = state.log_service.get_by_user_id(user_id).await?;

    Ok(UserLogsTemplate {
        user_id,
        logs: logs.into_iter().map(LogItem::from).collect(),
    })
}
