//! API routes.
//!
//! Each handler validates at the boundary, calls the pure engine, and makes
//! at most one store call. Storage failures are reported, never retried —
//! the insert is not idempotent.

use std::sync::{Arc, MutexGuard};

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use roi_core::{
    engine::{self, CalculationResult},
    input::CalculationInput,
    legacy::{self, LegacyCalculationInput, LegacyEstimate},
    store::{CalculationRecord, RoiStore},
    types::{RecordId, RecordSource},
};
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/calculate", post(calculate_legacy))
        .route("/api/roi", post(calculate_roi))
        .route("/api/history", get(history))
        .route("/api/health", get(health))
        .with_state(state)
}

fn store(state: &AppState) -> Result<MutexGuard<'_, RoiStore>, ApiError> {
    state
        .store
        .lock()
        .map_err(|_| ApiError::Internal("store mutex poisoned".to_string()))
}

// ── Legacy calculation ─────────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct LegacyCalculateResponse {
    pub message: String,
    pub result: LegacyEstimate,
}

/// POST /api/calculate — the flat legacy schema.
///
/// Returns the legacy formula results for wire compatibility; the inputs are
/// also mapped onto the canonical model and persisted as a history record.
async fn calculate_legacy(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LegacyCalculationInput>, JsonRejection>,
) -> Result<Json<LegacyCalculateResponse>, ApiError> {
    let Json(body) = body?;
    body.validate()?;
    let estimate = legacy::estimate(&body);

    let canonical = body.to_canonical();
    let result = engine::compute(&canonical)?;
    let record_id = store(&state)?.save_calculation(&canonical, &result, RecordSource::Legacy)?;
    log::debug!("legacy calculation saved as {record_id}");

    Ok(Json(LegacyCalculateResponse {
        message: "Calculation saved successfully".to_string(),
        result: estimate,
    }))
}

// ── Canonical calculation ──────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct RoiCalculateResponse {
    pub record_id: RecordId,
    pub result: CalculationResult,
}

/// POST /api/roi — the canonical form-driven input.
async fn calculate_roi(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CalculationInput>, JsonRejection>,
) -> Result<Json<RoiCalculateResponse>, ApiError> {
    let Json(input) = body?;
    input.validate()?;
    let result = engine::compute(&input)?;
    let record_id = store(&state)?.save_calculation(&input, &result, RecordSource::Form)?;

    Ok(Json(RoiCalculateResponse { record_id, result }))
}

// ── History ────────────────────────────────────────────────────

/// GET /api/history — the most recent persisted calculations, newest first.
async fn history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CalculationRecord>>, ApiError> {
    let records = store(&state)?.list_recent(state.history_limit)?;
    Ok(Json(records))
}

// ── Health ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: i64,
}

/// GET /api/health — server status and history size.
async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let records = store(&state)?.count()?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records,
    }))
}
