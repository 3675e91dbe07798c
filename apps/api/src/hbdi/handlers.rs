//! Axum route handlers for the HBDI report API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::hbdi::MetricSet;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateHbdiRequest {
    /// Missing `metrics` is treated as an empty set.
    #[serde(default)]
    pub metrics: MetricSet,
}

#[derive(Debug, Serialize)]
pub struct GenerateHbdiResponse {
    pub hbdi_json: Value,
}

/// POST /api/generate_hbdi_json
///
/// Renders the metrics into the report prompt, asks the model, and returns its JSON.
/// Malformed bodies are rejected with 400 in the same `{error, hbdi_json: null}` shape.
pub async fn handle_generate_hbdi_json(
    State(state): State<AppState>,
    payload: Result<Json<GenerateHbdiRequest>, JsonRejection>,
) -> Result<Json<GenerateHbdiResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let hbdi_json = state.pipeline.run(&request.metrics).await?;

    Ok(Json(GenerateHbdiResponse { hbdi_json }))
}
