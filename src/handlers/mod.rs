pub mod health;
pub mod heavy;
pub mod instance;
pub mod metrics;
pub mod ping;

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDateTime};
use thiserror::Error;

// ─── Shared helpers ──────────────────────────────────────────────

/// Local wall-clock time without offset, e.g. `2026-10-16T12:00:00.123456`.
pub fn local_timestamp() -> NaiveDateTime {
    Local::now().naive_local()
}

// ─── Unified error type ──────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "error":  self.to_string(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
