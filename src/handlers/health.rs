use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    pub instance_id: String,
}

// ─── GET /health ─────────────────────────────────────────────────
/// Target for the balancer's health check. Touches no counters, so
/// polling it does not skew `/api/metrics/custom`.

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "UP",
        instance_id: state.instance_id.clone(),
    })
}
