//! Axum route handlers for the Candidates API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::value::RawValue;
use tracing::info;

use crate::candidates::upload::read_upload;
use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidateFields};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub candidate_id: i64,
    pub analysis: Box<RawValue>,
}

/// POST /candidates
pub async fn handle_create(
    State(state): State<AppState>,
    payload: Result<Json<CandidateFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    let Json(request) = payload?;

    let candidate = state.store.create(request).await?;
    info!("Created candidate {} from text", candidate.id);

    Ok((StatusCode::CREATED, Json(candidate)))
}

/// POST /candidates/upload
///
/// Multipart form with a `.txt` résumé in `file`; see [`read_upload`].
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    let fields = read_upload(multipart).await?;

    let candidate = state.store.create(fields).await?;
    info!("Created candidate {} from upload", candidate.id);

    Ok((StatusCode::CREATED, Json(candidate)))
}

/// GET /candidates
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<Candidate>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /candidates/technology/:term
pub async fn handle_list_by_technology(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    Ok(Json(state.store.list_by_technology(&term).await?))
}

/// GET /candidates/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Candidate>, AppError> {
    Ok(Json(state.store.get(id).await?))
}

/// PUT /candidates/:id
///
/// The id is resolved before the body, so an unknown id is 404 whatever the payload.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<CandidateFields>, JsonRejection>,
) -> Result<Json<Candidate>, AppError> {
    state.store.get(id).await?;
    let Json(request) = payload?;

    let candidate = state.store.update(id, request).await?;
    info!("Updated candidate {id}");

    Ok(Json(candidate))
}

/// DELETE /candidates/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.store.get(id).await?;
    state.store.delete(id).await?;
    info!("Deleted candidate {id}");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /candidates/:id/analyze
///
/// Relays the stored résumé text to the analysis service. The candidate record
/// is left untouched whatever the outcome.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let candidate = state.store.get(id).await?;
    if candidate.resume_text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "Candidate {id} has no resume text to analyze"
        )));
    }

    let analysis = state.analyzer.analyze(&candidate.resume_text).await?;

    Ok(Json(AnalyzeResponse {
        candidate_id: candidate.id,
        analysis,
    }))
}
