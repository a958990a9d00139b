use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::{parse_service_id, parse_subject_id};
use super::{ApiError, AppState, SubjectSourceDto};

pub async fn list_sources(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SubjectSourceDto>>, ApiError> {
    let id = parse_subject_id(&id)?;
    let sources = state.catalog().list_subject_sources(id).await?;
    Ok(Json(sources))
}

pub async fn get_source(
    State(state): State<Arc<AppState>>,
    Path((id, service_id)): Path<(String, String)>,
) -> Result<Json<SubjectSourceDto>, ApiError> {
    let id = parse_subject_id(&id)?;
    let service_id = parse_service_id(service_id);

    let source = state.catalog().get_subject_source(id, &service_id).await?;
    Ok(Json(source))
}
