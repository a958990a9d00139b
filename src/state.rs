use std::sync::Arc;
use std::time::Duration;

use crate::clients::bangumi::{BangumiClient, MetadataFetcher};
use crate::config::Config;
use crate::db::Store;
use crate::services::{CatalogService, DefaultCatalogService};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// Reused by every outbound client so connections are pooled.
fn build_shared_http_client(
    timeout_seconds: u64,
    user_agent: &str,
) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

/// Process-wide collaborators, opened at startup and handed to the router.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub catalog: Arc<dyn CatalogService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::from_config(&config.database).await?;
        let bangumi = Self::bangumi_client(&config)?;

        Ok(Self::from_parts(config, store, Arc::new(bangumi)))
    }

    /// Wires the catalog engine from an already opened store and fetcher.
    #[must_use]
    pub fn from_parts(config: Config, store: Store, bangumi: Arc<dyn MetadataFetcher>) -> Self {
        let catalog = Arc::new(DefaultCatalogService::new(Arc::new(store.clone()), bangumi));

        Self {
            config: Arc::new(config),
            store,
            catalog,
        }
    }

    pub fn bangumi_client(config: &Config) -> anyhow::Result<BangumiClient> {
        let http = build_shared_http_client(
            config.bangumi.request_timeout_seconds,
            &config.bangumi.user_agent,
        )?;
        Ok(BangumiClient::with_shared_client(http, &config.bangumi.base_url))
    }
}
