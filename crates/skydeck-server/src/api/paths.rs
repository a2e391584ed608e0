//! Path planning and history endpoints.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;
use skydeck_core::{
    plan_coverage, summarize, CoveragePath, PathMetadata, PathRecord, PlanError,
    PlanningParameters,
};

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub ok: bool,
    pub path: CoveragePath,
    pub metadata: PathMetadata,
}

fn bad_request(message: &str, field: Option<&str>) -> (StatusCode, Json<serde_json::Value>) {
    let mut payload = serde_json::json!({ "error": message });
    if let Some(field) = field {
        payload["field"] = serde_json::Value::String(field.to_string());
    }
    (StatusCode::BAD_REQUEST, Json(payload))
}

fn plan_rejection(err: PlanError) -> (StatusCode, Json<serde_json::Value>) {
    let message = err.to_string();
    let PlanError::InvalidParameter { field, .. } = err;
    bad_request(&message, Some(field))
}

/// Compute a coverage path without persisting it.
pub async fn plan_path(
    Json(params): Json<PlanningParameters>,
) -> Result<Json<PlanResponse>, (StatusCode, Json<serde_json::Value>)> {
    let path = plan_coverage(&params).map_err(plan_rejection)?;
    let metadata = summarize(&params, &path);

    Ok(Json(PlanResponse {
        ok: true,
        path,
        metadata,
    }))
}

/// Plan from the submitted parameters and append the record to the history.
///
/// The path is always recomputed server-side so a stored record can never
/// disagree with its parameters.
pub async fn save_path(
    State(state): State<Arc<AppState>>,
    Json(params): Json<PlanningParameters>,
) -> Result<(StatusCode, Json<PathRecord>), (StatusCode, Json<serde_json::Value>)> {
    let path = plan_coverage(&params).map_err(plan_rejection)?;
    let metadata = summarize(&params, &path);

    let record = PathRecord {
        id: uuid::Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        params,
        path,
        metadata,
    };
    state.insert_record(record.clone());
    tracing::info!("Saved path record {}", record.id);

    Ok((StatusCode::CREATED, Json(record)))
}

/// History records, newest first.
pub async fn list_paths(State(state): State<Arc<AppState>>) -> Json<Vec<PathRecord>> {
    Json(state.list_records())
}

pub async fn get_path(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PathRecord>, StatusCode> {
    state.get_record(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Serve a record as a JSON download, named after its creation time.
pub async fn export_path(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let record = state.get_record(&id).ok_or(StatusCode::NOT_FOUND)?;

    let filename = format!(
        "path-{}.json",
        record.created_at.to_rfc3339().replace([':', '.'], "-")
    );
    let disposition = format!("attachment; filename=\"{}\"", filename);

    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(record)))
}
