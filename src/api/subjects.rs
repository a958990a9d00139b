use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::parse_subject_id;
use super::{ApiError, AppState, SubjectDetailDto, SubjectDto};

pub async fn list_subjects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SubjectDto>>, ApiError> {
    let subjects = state.catalog().list_subjects().await?;
    Ok(Json(subjects))
}

/// Serves both `/subjects/{id}` and `/subjects/{id}/eps`.
pub async fn get_subject(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SubjectDetailDto>, ApiError> {
    let id = parse_subject_id(&id)?;
    let detail = state.catalog().get_subject_detail(id).await?;
    Ok(Json(detail))
}
