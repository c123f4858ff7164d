// src/handlers/checklist.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::checklist::{AddItemRequest, ChecklistView, UpdateItemRequest},
    store::Store,
};

/// Get the preparation checklist of an interview with its progress.
pub async fn get_checklist(
    State(store): State<Arc<Store>>,
    Path(interview_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let checklist = store.get_checklist(interview_id).await?;
    Ok(Json(ChecklistView::from(checklist)))
}

pub async fn add_item(
    State(store): State<Arc<Store>>,
    Path(interview_id): Path<u64>,
    Json(payload): Json<AddItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let checklist = store.add_item(interview_id, &payload.label).await?;
    Ok((StatusCode::CREATED, Json(ChecklistView::from(checklist))))
}

/// Tick or untick a single item.
pub async fn update_item(
    State(store): State<Arc<Store>>,
    Path((interview_id, item_id)): Path<(u64, u64)>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let checklist = store
        .set_item_done(interview_id, item_id, payload.done)
        .await?;
    Ok(Json(ChecklistView::from(checklist)))
}

pub async fn remove_item(
    State(store): State<Arc<Store>>,
    Path((interview_id, item_id)): Path<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let checklist = store.remove_item(interview_id, item_id).await?;
    Ok(Json(ChecklistView::from(checklist)))
}
