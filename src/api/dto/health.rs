//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each system component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub users: CheckStatus,
    pub logs: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
}

impl CheckStatus {
    /// A healthy table holding `rows` entries.
    pub fn ok(rows: usize) -> Self {
        Self {
            status: "ok".to_string(),
            message: None,
            rows: Some(rows),
        }
    }

    /// A table that could not be read.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
            rows: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
