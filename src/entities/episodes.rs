use sea_orm::entity::prelude::*;

/// One service's copy of one Bangumi episode.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "episodes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub subject_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub episode_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: String,
    pub episode_url_id: Option<String>,
    pub video_url_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sources::Entity",
        from = "(Column::SubjectId, Column::ServiceId)",
        to = "(super::sources::Column::SubjectId, super::sources::Column::ServiceId)",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Sources,
}

impl Related<super::sources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sources.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
