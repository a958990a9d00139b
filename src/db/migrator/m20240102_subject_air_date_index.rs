use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_subjects_on_air_date")
                    .table(Subjects::Table)
                    .col(Subjects::OnAirDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_episodes_subject_episode")
                    .table(Episodes::Table)
                    .col(Episodes::SubjectId)
                    .col(Episodes::EpisodeId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_episodes_subject_episode")
                    .table(Episodes::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_subjects_on_air_date")
                    .table(Subjects::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    OnAirDate,
}

#[derive(DeriveIden)]
enum Episodes {
    Table,
    SubjectId,
    EpisodeId,
}
