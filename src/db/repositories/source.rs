use crate::entities::{prelude::*, services, sources};
use crate::models::source::SourceRow;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait, Select,
};

pub struct SourceRepository {
    conn: DatabaseConnection,
}

impl SourceRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn joined() -> Select<Sources> {
        Sources::find()
            .select_only()
            .column(sources::Column::SubjectId)
            .column(sources::Column::ServiceId)
            .column(services::Column::LocalizedName)
            .column(sources::Column::Authorized)
            .column(sources::Column::Paid)
            .column(services::Column::SubjectUrlFormat)
            .column(sources::Column::SubjectUrlId)
            .column(services::Column::EpisodeUrlFormat)
            .column(services::Column::VideoUrlFormat)
            .column(sources::Column::SubtitleLocales)
            .join(JoinType::InnerJoin, sources::Relation::Services.def())
    }

    pub async fn list_for_subject(&self, subject_id: i32) -> anyhow::Result<Vec<SourceRow>> {
        let rows = Self::joined()
            .filter(sources::Column::SubjectId.eq(subject_id))
            .into_model::<SourceRow>()
            .all(&self.conn)
            .await?;
        Ok(rows)
    }

    /// Returns every row matching the pair; callers decide what anything
    /// other than exactly one row means.
    pub async fn find_for_service(
        &self,
        subject_id: i32,
        service_id: &str,
    ) -> anyhow::Result<Vec<SourceRow>> {
        let rows = Self::joined()
            .filter(sources::Column::SubjectId.eq(subject_id))
            .filter(sources::Column::ServiceId.eq(service_id))
            .into_model::<SourceRow>()
            .all(&self.conn)
            .await?;
        Ok(rows)
    }
}
