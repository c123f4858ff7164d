// src/handlers/interview.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::interview::{InterviewListParams, ScheduleInterviewRequest},
    store::Store,
};

/// Runs the derived validation plus the cross-field link checks.
fn validate_schedule(payload: &ScheduleInterviewRequest) -> Result<(), AppError> {
    payload.validate()?;
    payload
        .check_links()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// List interviews, earliest first.
/// `?upcoming=true` hides the ones that already started.
pub async fn list_interviews(
    State(store): State<Arc<Store>>,
    Query(params): Query<InterviewListParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(store.list_interviews(params.upcoming).await))
}

pub async fn get_interview(
    State(store): State<Arc<Store>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(store.get_interview(id).await?))
}

/// Schedule a new interview.
/// Notes are sanitized before they are stored; a default preparation
/// checklist is created alongside.
pub async fn create_interview(
    State(store): State<Arc<Store>>,
    Json(payload): Json<ScheduleInterviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_schedule(&payload)?;

    let interview = store.create_interview(payload).await;
    tracing::info!(
        id = interview.id,
        company = %interview.company,
        "Interview scheduled"
    );

    Ok((StatusCode::CREATED, Json(interview)))
}

/// Reschedule / edit an interview (full replace).
pub async fn update_interview(
    State(store): State<Arc<Store>>,
    Path(id): Path<u64>,
    Json(payload): Json<ScheduleInterviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_schedule(&payload)?;

    let interview = store.update_interview(id, payload).await?;
    tracing::info!(id, "Interview updated");

    Ok(Json(interview))
}

pub async fn delete_interview(
    State(store): State<Arc<Store>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    store.delete_interview(id).await?;
    tracing::info!(id, "Interview deleted");

    Ok(StatusCode::NO_CONTENT)
}
