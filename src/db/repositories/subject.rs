use crate::entities::{prelude::*, subjects};
use crate::models::subject::SubjectRow;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

pub struct SubjectRepository {
    conn: DatabaseConnection,
}

impl SubjectRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_by_air_date(&self) -> anyhow::Result<Vec<SubjectRow>> {
        let rows = Subjects::find()
            .order_by_asc(subjects::Column::OnAirDate)
            .all(&self.conn)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<SubjectRow>> {
        let row = Subjects::find_by_id(id).one(&self.conn).await?;
        Ok(row)
    }
}
