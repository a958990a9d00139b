//! Read-only catalog operations merging the local store with Bangumi.

use crate::api::types::{
    EpisodeDto, EpisodeSourceDto, SubjectDetailDto, SubjectDto, SubjectSourceDto,
};
use crate::domain::{EpisodeId, ServiceId, SubjectId};
use thiserror::Error;

/// Errors raised by catalog operations.
///
/// Only `NotFound` is a client-facing outcome; the rest abort the request.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("External API error: {service} - {message}")]
    Upstream { service: String, message: String },
}

impl CatalogError {
    pub fn subject_not_found(id: SubjectId) -> Self {
        Self::NotFound(format!("Subject {id}"))
    }

    pub fn bangumi_error(err: &anyhow::Error) -> Self {
        Self::Upstream {
            service: crate::constants::bangumi::SERVICE_NAME.to_string(),
            message: format!("{err:#}"),
        }
    }

    pub fn database(err: &anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// The aggregation engine behind every `/v1` route.
#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// All subjects by air date, each with its `api_ref`.
    ///
    /// An empty catalog is reported as [`CatalogError::NotFound`].
    async fn list_subjects(&self) -> Result<Vec<SubjectDto>, CatalogError>;

    /// A subject with its Bangumi summary, its episodes (each carrying the
    /// episode sources bound to it) and its sources.
    async fn get_subject_detail(&self, id: SubjectId) -> Result<SubjectDetailDto, CatalogError>;

    /// One Bangumi episode of a stored subject with its sources. The episode
    /// carries no `api_ref`.
    async fn get_episode_detail(
        &self,
        id: SubjectId,
        episode_id: EpisodeId,
    ) -> Result<EpisodeDto, CatalogError>;

    async fn list_episode_sources(
        &self,
        id: SubjectId,
        episode_id: EpisodeId,
    ) -> Result<Vec<EpisodeSourceDto>, CatalogError>;

    /// The shaped record alone; single lookups do not link to themselves.
    async fn get_episode_source(
        &self,
        id: SubjectId,
        episode_id: EpisodeId,
        service_id: &ServiceId,
    ) -> Result<EpisodeSourceDto, CatalogError>;

    async fn list_subject_sources(
        &self,
        id: SubjectId,
    ) -> Result<Vec<SubjectSourceDto>, CatalogError>;

    /// The shaped record alone, without `api_ref`.
    async fn get_subject_source(
        &self,
        id: SubjectId,
        service_id: &ServiceId,
    ) -> Result<SubjectSourceDto, CatalogError>;
}
