use axum::{extract::State, Json};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

use super::local_timestamp;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResponse {
    pub message: String,
    pub timestamp: NaiveDateTime,
    /// This request's position in the instance-wide sequence.
    pub request_count: u64,
}

// ─── GET /api/test ───────────────────────────────────────────────

pub async fn test_endpoint(State(state): State<Arc<AppState>>) -> Json<TestResponse> {
    let request_count = state.engine.increment_and_get_request_count();

    Json(TestResponse {
        message: format!("Hello from instance: {}", state.instance_id),
        timestamp: local_timestamp(),
        request_count,
    })
}
