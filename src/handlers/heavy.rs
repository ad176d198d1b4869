use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::AppState;

use super::AppError;

// ─── Request / response types ────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct HeavyParams {
    /// Outer loop count. Deliberately unbounded: a huge value is a valid
    /// way to pin a core.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

fn default_iterations() -> u32 {
    1000
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeavyResult {
    pub instance_id: String,
    pub result: f64,
    /// Handler-measured wall time, e.g. `"42ms"`.
    pub processing_time: String,
    pub iterations: u32,
}

// ─── POST /api/heavy ─────────────────────────────────────────────

pub async fn heavy_operation(
    State(state): State<Arc<AppState>>,
    params: Result<Query<HeavyParams>, QueryRejection>,
) -> Result<Json<HeavyResult>, AppError> {
    let Query(params) = params?;
    let iterations = params.iterations;

    let t0 = Instant::now();

    // CPU-bound: keep it off the async workers
    let engine = state.engine.clone();
    let result = tokio::task::spawn_blocking(move || engine.perform_heavy_calculation(iterations))
        .await
        .map_err(|e| AppError::Internal(format!("calculation task failed: {e}")))?;

    let elapsed_ms = t0.elapsed().as_millis();

    tracing::info!(
        elapsed_ms = %elapsed_ms,
        iterations,
        instance_id = %state.instance_id,
        "heavy operation completed"
    );

    Ok(Json(HeavyResult {
        instance_id: state.instance_id.clone(),
        result,
        processing_time: format!("{elapsed_ms}ms"),
        iterations,
    }))
}
