//! Default implementation of [`CatalogService`].
//!
//! Independent reads are issued concurrently with `tokio::try_join!`; the
//! first failing branch fails the whole request.

use crate::api::types::{
    EpisodeDto, EpisodeSourceDto, SubjectDetailDto, SubjectDto, SubjectSourceDto,
};
use crate::clients::bangumi::MetadataFetcher;
use crate::db::CatalogStore;
use crate::domain::{EpisodeId, ServiceId, SubjectId};
use crate::models::subject::SubjectRow;
use crate::services::api_ref;
use crate::services::catalog_service::{CatalogError, CatalogService};
use crate::services::collate::{
    shape_episode_source, shape_linked_episode_source, shape_subject, shape_subject_source,
};
use crate::services::index::build_index;
use std::sync::Arc;
use tracing::debug;

pub struct DefaultCatalogService {
    store: Arc<dyn CatalogStore>,
    bangumi: Arc<dyn MetadataFetcher>,
}

impl DefaultCatalogService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>, bangumi: Arc<dyn MetadataFetcher>) -> Self {
        Self { store, bangumi }
    }

    async fn require_subject(&self, id: SubjectId) -> Result<SubjectRow, CatalogError> {
        self.store
            .get_subject(id)
            .await
            .map_err(|e| CatalogError::database(&e))?
            .ok_or_else(|| CatalogError::subject_not_found(id))
    }

    /// Bangumi summary and episodes, each episode linked and with an empty
    /// source list.
    async fn fetch_episodes(
        &self,
        id: SubjectId,
    ) -> Result<(Option<String>, Vec<EpisodeDto>), CatalogError> {
        let metadata = self
            .bangumi
            .fetch_subject(id)
            .await
            .map_err(|e| CatalogError::bangumi_error(&e))?;

        let eps = metadata
            .eps
            .into_iter()
            .map(|episode| EpisodeDto {
                api_ref: Some(api_ref::episode(id, episode.id)),
                episode,
                sources: Vec::new(),
            })
            .collect();

        Ok((metadata.summary, eps))
    }

    /// Episode sources of one episode, each linked to its own route.
    async fn episode_sources(
        &self,
        id: SubjectId,
        episode_id: EpisodeId,
    ) -> Result<Vec<EpisodeSourceDto>, CatalogError> {
        let rows = self
            .store
            .list_episode_sources(id, episode_id)
            .await
            .map_err(|e| CatalogError::database(&e))?;
        Ok(rows
            .into_iter()
            .map(|row| link_episode_source(id, episode_id, shape_episode_source(row)))
            .collect())
    }
}

fn link_subject_source(id: SubjectId, source: SubjectSourceDto) -> SubjectSourceDto {
    SubjectSourceDto {
        api_ref: Some(api_ref::subject_source(id, &source.service_id)),
        ..source
    }
}

fn link_episode_source(
    id: SubjectId,
    episode_id: EpisodeId,
    source: EpisodeSourceDto,
) -> EpisodeSourceDto {
    EpisodeSourceDto {
        api_ref: Some(api_ref::episode_source(id, episode_id, &source.service_id)),
        ..source
    }
}

#[async_trait::async_trait]
impl CatalogService for DefaultCatalogService {
    async fn list_subjects(&self) -> Result<Vec<SubjectDto>, CatalogError> {
        let rows = self
            .store
            .list_subjects_by_air_date()
            .await
            .map_err(|e| CatalogError::database(&e))?;

        if rows.is_empty() {
            return Err(CatalogError::NotFound("Subjects".to_string()));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let link = api_ref::subject(row.id);
                SubjectDto {
                    api_ref: Some(link),
                    ..shape_subject(row)
                }
            })
            .collect())
    }

    async fn get_subject_detail(&self, id: SubjectId) -> Result<SubjectDetailDto, CatalogError> {
        let subject = shape_subject(self.require_subject(id).await?);

        let ((summary, mut eps), links, sources) = tokio::try_join!(
            self.fetch_episodes(id),
            async {
                self.store
                    .list_episode_links(id)
                    .await
                    .map_err(|e| CatalogError::database(&e))
            },
            async {
                self.store
                    .list_sources(id)
                    .await
                    .map_err(|e| CatalogError::database(&e))
            },
        )?;

        let source_index = build_index(&sources, |source| source.service_id.clone());
        let episode_index = build_index(&eps, |ep| ep.episode.id);

        for link in links {
            let Some(&source_pos) = source_index.get(link.service_id.as_str()) else {
                debug!(
                    subject_id = %id,
                    service_id = %link.service_id,
                    "Episode source without a subject source, skipping"
                );
                continue;
            };
            let Some(&episode_pos) = episode_index.get(&EpisodeId::new(link.episode_id)) else {
                debug!(
                    subject_id = %id,
                    episode_id = link.episode_id,
                    "Episode source for an episode Bangumi does not list, skipping"
                );
                continue;
            };

            let episode = &mut eps[episode_pos];
            let shaped = shape_linked_episode_source(link, &sources[source_pos]);
            episode
                .sources
                .push(link_episode_source(id, episode.episode.id, shaped));
        }

        Ok(SubjectDetailDto {
            subject,
            summary,
            eps,
            sources: sources
                .into_iter()
                .map(|row| link_subject_source(id, shape_subject_source(row)))
                .collect(),
        })
    }

    async fn get_episode_detail(
        &self,
        id: SubjectId,
        episode_id: EpisodeId,
    ) -> Result<EpisodeDto, CatalogError> {
        self.require_subject(id).await?;

        let ((_, eps), sources) =
            tokio::try_join!(self.fetch_episodes(id), self.episode_sources(id, episode_id))?;

        let mut episode = eps
            .into_iter()
            .find(|ep| ep.episode.id == episode_id)
            .ok_or_else(|| {
                CatalogError::NotFound(format!("Episode {episode_id} of subject {id}"))
            })?;

        episode.sources = sources;
        episode.api_ref = None;
        Ok(episode)
    }

    async fn list_episode_sources(
        &self,
        id: SubjectId,
        episode_id: EpisodeId,
    ) -> Result<Vec<EpisodeSourceDto>, CatalogError> {
        let sources = self.episode_sources(id, episode_id).await?;
        if sources.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "Sources of episode {episode_id} of subject {id}"
            )));
        }
        Ok(sources)
    }

    async fn get_episode_source(
        &self,
        id: SubjectId,
        episode_id: EpisodeId,
        service_id: &ServiceId,
    ) -> Result<EpisodeSourceDto, CatalogError> {
        let mut rows = self
            .store
            .find_episode_source(id, episode_id, service_id)
            .await
            .map_err(|e| CatalogError::database(&e))?;

        match (rows.pop(), rows.is_empty()) {
            (Some(row), true) => Ok(shape_episode_source(row)),
            _ => Err(CatalogError::NotFound(format!(
                "Source {service_id} of episode {episode_id} of subject {id}"
            ))),
        }
    }

    async fn list_subject_sources(
        &self,
        id: SubjectId,
    ) -> Result<Vec<SubjectSourceDto>, CatalogError> {
        let rows = self
            .store
            .list_sources(id)
            .await
            .map_err(|e| CatalogError::database(&e))?;

        if rows.is_empty() {
            return Err(CatalogError::NotFound(format!("Sources of subject {id}")));
        }

        Ok(rows
            .into_iter()
            .map(|row| link_subject_source(id, shape_subject_source(row)))
            .collect())
    }

    async fn get_subject_source(
        &self,
        id: SubjectId,
        service_id: &ServiceId,
    ) -> Result<SubjectSourceDto, CatalogError> {
        let mut rows = self
            .store
            .find_source(id, service_id)
            .await
            .map_err(|e| CatalogError::database(&e))?;

        match (rows.pop(), rows.is_empty()) {
            (Some(row), true) => Ok(shape_subject_source(row)),
            _ => Err(CatalogError::NotFound(format!(
                "Source {service_id} of subject {id}"
            ))),
        }
    }
}
