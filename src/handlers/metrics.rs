use axum::{extract::State, Json};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Aggregates an operator compares across instances to check the
/// balancer's distribution.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMetrics {
    pub instance_id: String,
    pub total_requests: u64,
    pub processed_requests: u64,
    /// Mean heavy-calculation time in ms (`0.0` before the first one).
    pub average_processing_time: f64,
    pub uptime: String,
    pub started_at: DateTime<Local>,
}

// ─── GET /api/metrics/custom ─────────────────────────────────────

pub async fn custom_metrics(State(state): State<Arc<AppState>>) -> Json<CustomMetrics> {
    let engine = &state.engine;

    Json(CustomMetrics {
        instance_id: state.instance_id.clone(),
        total_requests: engine.total_requests(),
        processed_requests: engine.processed_count(),
        average_processing_time: engine.average_processing_time(),
        uptime: engine.uptime_string(),
        started_at: engine.started_at(),
    })
}
