use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::{parse_episode_id, parse_service_id, parse_subject_id};
use super::{ApiError, AppState, EpisodeDto, EpisodeSourceDto};

pub async fn get_episode(
    State(state): State<Arc<AppState>>,
    Path((id, ep_id)): Path<(String, String)>,
) -> Result<Json<EpisodeDto>, ApiError> {
    let id = parse_subject_id(&id)?;
    let ep_id = parse_episode_id(&ep_id)?;

    let episode = state.catalog().get_episode_detail(id, ep_id).await?;
    Ok(Json(episode))
}

pub async fn list_episode_sources(
    State(state): State<Arc<AppState>>,
    Path((id, ep_id)): Path<(String, String)>,
) -> Result<Json<Vec<EpisodeSourceDto>>, ApiError> {
    let id = parse_subject_id(&id)?;
    let ep_id = parse_episode_id(&ep_id)?;

    let sources = state.catalog().list_episode_sources(id, ep_id).await?;
    Ok(Json(sources))
}

pub async fn get_episode_source(
    State(state): State<Arc<AppState>>,
    Path((id, ep_id, service_id)): Path<(String, String, String)>,
) -> Result<Json<EpisodeSourceDto>, ApiError> {
    let id = parse_subject_id(&id)?;
    let ep_id = parse_episode_id(&ep_id)?;
    let service_id = parse_service_id(service_id);

    let source = state
        .catalog()
        .get_episode_source(id, ep_id, &service_id)
        .await?;
    Ok(Json(source))
}
