use crate::entities::{episodes, prelude::*, services, sources};
use crate::models::episode::{EpisodeLinkRow, EpisodeSourceRow};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait, Select,
};

pub struct EpisodeSourceRepository {
    conn: DatabaseConnection,
}

impl EpisodeSourceRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Episodes joined to their source on (subject, service) and to the
    /// service for the URL formats.
    fn joined() -> Select<Episodes> {
        Episodes::find()
            .select_only()
            .column(episodes::Column::SubjectId)
            .column(episodes::Column::EpisodeId)
            .column(episodes::Column::ServiceId)
            .column(services::Column::LocalizedName)
            .column(sources::Column::Authorized)
            .column(sources::Column::Paid)
            .column(sources::Column::SubjectUrlId)
            .column(services::Column::EpisodeUrlFormat)
            .column(episodes::Column::EpisodeUrlId)
            .column(services::Column::VideoUrlFormat)
            .column(episodes::Column::VideoUrlId)
            .column(sources::Column::SubtitleLocales)
            .join(JoinType::InnerJoin, episodes::Relation::Sources.def())
            .join(JoinType::InnerJoin, sources::Relation::Services.def())
    }

    pub async fn list_links_for_subject(
        &self,
        subject_id: i32,
    ) -> anyhow::Result<Vec<EpisodeLinkRow>> {
        let rows = Episodes::find()
            .filter(episodes::Column::SubjectId.eq(subject_id))
            .all(&self.conn)
            .await?;
        Ok(rows)
    }

    pub async fn list_for_episode(
        &self,
        subject_id: i32,
        episode_id: i32,
    ) -> anyhow::Result<Vec<EpisodeSourceRow>> {
        let rows = Self::joined()
            .filter(episodes::Column::SubjectId.eq(subject_id))
            .filter(episodes::Column::EpisodeId.eq(episode_id))
            .into_model::<EpisodeSourceRow>()
            .all(&self.conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_for_service(
        &self,
        subject_id: i32,
        episode_id: i32,
        service_id: &str,
    ) -> anyhow::Result<Vec<EpisodeSourceRow>> {
        let rows = Self::joined()
            .filter(episodes::Column::SubjectId.eq(subject_id))
            .filter(episodes::Column::EpisodeId.eq(episode_id))
            .filter(episodes::Column::ServiceId.eq(service_id))
            .into_model::<EpisodeSourceRow>()
            .all(&self.conn)
            .await?;
        Ok(rows)
    }
}
