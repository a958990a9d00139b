use crate::config::DatabaseConfig;
use crate::domain::{EpisodeId, ServiceId, SubjectId};
use crate::models::episode::{EpisodeLinkRow, EpisodeSourceRow};
use crate::models::source::SourceRow;
use crate::models::subject::SubjectRow;
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

/// Read-only queries the aggregation engine issues against the catalog.
///
/// Single-record lookups return every matching row so the caller can apply
/// its exactly-one-row rule.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_subjects_by_air_date(&self) -> Result<Vec<SubjectRow>>;

    async fn get_subject(&self, id: SubjectId) -> Result<Option<SubjectRow>>;

    async fn list_sources(&self, subject_id: SubjectId) -> Result<Vec<SourceRow>>;

    async fn find_source(
        &self,
        subject_id: SubjectId,
        service_id: &ServiceId,
    ) -> Result<Vec<SourceRow>>;

    async fn list_episode_links(&self, subject_id: SubjectId) -> Result<Vec<EpisodeLinkRow>>;

    async fn list_episode_sources(
        &self,
        subject_id: SubjectId,
        episode_id: EpisodeId,
    ) -> Result<Vec<EpisodeSourceRow>>;

    async fn find_episode_source(
        &self,
        subject_id: SubjectId,
        episode_id: EpisodeId,
        service_id: &ServiceId,
    ) -> Result<Vec<EpisodeSourceRow>>;
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1, true).await
    }

    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::with_pool_options(
            &config.url,
            config.max_connections,
            config.min_connections,
            config.run_migrations,
        )
        .await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
        run_migrations: bool,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if let Some(path_str) = db_url.strip_prefix("sqlite:")
            && !in_memory
        {
            let path_str = path_str.trim_start_matches("//");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        if in_memory {
            // Every SQLite memory connection is its own database; pin one
            // connection and never recycle it.
            opt.max_connections(1).min_connections(1);
        } else {
            opt.max_connections(max_connections)
                .min_connections(min_connections)
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt).await?;

        if run_migrations {
            migrator::Migrator::up(&conn, None).await?;
        }

        info!(
            migrations = run_migrations,
            "Database connected (pool: {}-{})", min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    /// Closes the pool. Clones of this store become unusable afterwards.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        info!("Database connection closed");
        Ok(())
    }

    fn subject_repo(&self) -> repositories::subject::SubjectRepository {
        repositories::subject::SubjectRepository::new(self.conn.clone())
    }

    fn source_repo(&self) -> repositories::source::SourceRepository {
        repositories::source::SourceRepository::new(self.conn.clone())
    }

    fn episode_source_repo(&self) -> repositories::episode_source::EpisodeSourceRepository {
        repositories::episode_source::EpisodeSourceRepository::new(self.conn.clone())
    }
}

#[async_trait::async_trait]
impl CatalogStore for Store {
    async fn list_subjects_by_air_date(&self) -> Result<Vec<SubjectRow>> {
        self.subject_repo().list_by_air_date().await
    }

    async fn get_subject(&self, id: SubjectId) -> Result<Option<SubjectRow>> {
        self.subject_repo().get(id.value()).await
    }

    async fn list_sources(&self, subject_id: SubjectId) -> Result<Vec<SourceRow>> {
        self.source_repo().list_for_subject(subject_id.value()).await
    }

    async fn find_source(
        &self,
        subject_id: SubjectId,
        service_id: &ServiceId,
    ) -> Result<Vec<SourceRow>> {
        self.source_repo()
            .find_for_service(subject_id.value(), service_id.as_str())
            .await
    }

    async fn list_episode_links(&self, subject_id: SubjectId) -> Result<Vec<EpisodeLinkRow>> {
        self.episode_source_repo()
            .list_links_for_subject(subject_id.value())
            .await
    }

    async fn list_episode_sources(
        &self,
        subject_id: SubjectId,
        episode_id: EpisodeId,
    ) -> Result<Vec<EpisodeSourceRow>> {
        self.episode_source_repo()
            .list_for_episode(subject_id.value(), episode_id.value())
            .await
    }

    async fn find_episode_source(
        &self,
        subject_id: SubjectId,
        episode_id: EpisodeId,
        service_id: &ServiceId,
    ) -> Result<Vec<EpisodeSourceRow>> {
        self.episode_source_repo()
            .find_for_service(subject_id.value(), episode_id.value(), service_id.as_str())
            .await
    }
}
