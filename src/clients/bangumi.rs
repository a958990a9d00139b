use crate::constants::bangumi::DEFAULT_BASE_URL;
use crate::domain::{EpisodeId, SubjectId};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The part of a Bangumi subject the catalog merges in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectMetadata {
    #[serde(default)]
    pub summary: Option<String>,
    pub eps: Vec<BgmEpisode>,
}

/// An episode as published by Bangumi.
///
/// Provider-internal fields (`comment`, `url`) are never deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BgmEpisode {
    pub id: EpisodeId,
    #[serde(rename = "type")]
    pub episode_type: i32,
    #[serde(default)]
    pub sort: Option<serde_json::Number>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_cn: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub airdate: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Fetches subject metadata from an external provider.
#[async_trait::async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch_subject(&self, id: SubjectId) -> Result<SubjectMetadata>;
}

#[derive(Clone)]
pub struct BangumiClient {
    client: Client,
    base_url: String,
}

impl Default for BangumiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BangumiClient {
    pub fn new() -> Self {
        Self::with_shared_client(Client::new(), DEFAULT_BASE_URL)
    }

    pub fn with_shared_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn subject_url(&self, id: SubjectId) -> String {
        format!("{}/subject/{}?responseGroup=large", self.base_url, id)
    }
}

#[async_trait::async_trait]
impl MetadataFetcher for BangumiClient {
    async fn fetch_subject(&self, id: SubjectId) -> Result<SubjectMetadata> {
        let url = self.subject_url(id);
        debug!(%url, "Fetching Bangumi subject");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Bangumi API error: {} - {}", status, body));
        }

        let metadata: SubjectMetadata = response
            .json()
            .await
            .with_context(|| format!("Malformed Bangumi payload for subject {id}"))?;

        Ok(metadata)
    }
}
