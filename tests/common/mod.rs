#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use enhanced_bangumi::clients::bangumi::{BgmEpisode, MetadataFetcher, SubjectMetadata};
use enhanced_bangumi::config::Config;
use enhanced_bangumi::db::Store;
use enhanced_bangumi::domain::{EpisodeId, SubjectId};
use enhanced_bangumi::entities::{episodes, services, sources, subjects};
use enhanced_bangumi::state::SharedState;
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, IntoActiveModel};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

pub const CHARLOTTE: i32 = 120_925;
pub const PRISMA_ILLYA: i32 = 78_405;
pub const UNKNOWN_SUBJECT: i32 = 13_131;

pub const CHARLOTTE_EP1: i32 = 541_642;
pub const CHARLOTTE_EP2: i32 = 541_643;
/// Published by Bangumi but carried by no service.
pub const CHARLOTTE_EP3: i32 = 541_644;
/// Bound locally but missing from the Bangumi episode list.
pub const ORPHAN_EPISODE: i32 = 999_999;

/// In-memory [`MetadataFetcher`] that counts calls.
#[derive(Default)]
pub struct FakeBangumi {
    subjects: HashMap<SubjectId, SubjectMetadata>,
    fail: bool,
    calls: AtomicUsize,
}

impl FakeBangumi {
    pub fn seeded() -> Self {
        let mut subjects = HashMap::new();
        subjects.insert(
            SubjectId::new(CHARLOTTE),
            SubjectMetadata {
                summary: Some("Yuu Otosaka can possess others for five seconds.".to_string()),
                eps: vec![
                    episode(CHARLOTTE_EP1, 1, "2015-07-04"),
                    episode(CHARLOTTE_EP2, 2, "2015-07-11"),
                    episode(CHARLOTTE_EP3, 3, "2015-07-18"),
                ],
            },
        );
        subjects.insert(
            SubjectId::new(PRISMA_ILLYA),
            SubjectMetadata {
                summary: None,
                eps: vec![episode(300_001, 1, "2013-07-13")],
            },
        );

        Self {
            subjects,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MetadataFetcher for FakeBangumi {
    async fn fetch_subject(&self, id: SubjectId) -> anyhow::Result<SubjectMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            anyhow::bail!("Bangumi API error: 503 Service Unavailable");
        }

        self.subjects
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Bangumi API error: 404 Not Found"))
    }
}

pub fn episode(id: i32, sort: i64, airdate: &str) -> BgmEpisode {
    BgmEpisode {
        id: EpisodeId::new(id),
        episode_type: 0,
        sort: Some(serde_json::Number::from(sort)),
        name: Some(format!("Episode {sort}")),
        name_cn: None,
        duration: Some("00:24:00".to_string()),
        airdate: Some(airdate.to_string()),
        desc: None,
        status: Some("Air".to_string()),
    }
}

pub async fn seeded_store() -> Store {
    let store = Store::with_pool_options("sqlite::memory:", 1, 1, true)
        .await
        .expect("Failed to open in-memory store");
    seed(&store).await;
    store
}

async fn seed(store: &Store) {
    let db = &store.conn;

    for subject in [
        subjects::Model {
            id: CHARLOTTE,
            name_jp: Some("Charlotte".to_string()),
            name_cn: Some("Charlotte".to_string()),
            name_en: Some("Charlotte".to_string()),
            mal_id: Some(28_999),
            website: Some("https://charlotte-anime.jp/".to_string()),
            on_air_date: Some(Utc.with_ymd_and_hms(2015, 7, 4, 15, 0, 0).unwrap()),
            bgm_image_url: Some("9b/d6/120925_Zp040".to_string()),
        },
        subjects::Model {
            id: PRISMA_ILLYA,
            name_jp: Some("Fate/kaleid liner プリズマ☆イリヤ".to_string()),
            name_cn: Some("魔法少女伊莉雅".to_string()),
            name_en: None,
            mal_id: None,
            website: None,
            on_air_date: Some(Utc.with_ymd_and_hms(2013, 7, 13, 15, 0, 0).unwrap()),
            bgm_image_url: None,
        },
    ] {
        subject.into_active_model().insert(db).await.unwrap();
    }

    for service in [
        services::Model {
            id: "bilibili.com_cn".to_string(),
            localized_name: "哔哩哔哩".to_string(),
            subject_url_format: Some("https://www.bilibili.com/bangumi/media/%s/".to_string()),
            episode_url_format: Some("https://www.bilibili.com/video/%e".to_string()),
            video_url_format: None,
        },
        services::Model {
            id: "acfun.cn".to_string(),
            localized_name: "AcFun".to_string(),
            subject_url_format: Some("https://www.acfun.cn/bangumi/%s".to_string()),
            episode_url_format: Some("https://www.acfun.cn/bangumi/%s_%e".to_string()),
            video_url_format: Some("https://www.acfun.cn/v/%s".to_string()),
        },
    ] {
        service.into_active_model().insert(db).await.unwrap();
    }

    for source in [
        sources::Model {
            subject_id: CHARLOTTE,
            service_id: "bilibili.com_cn".to_string(),
            authorized: true,
            paid: 0,
            subject_url_id: Some("md2572".to_string()),
            subtitle_locales: Some("zh_CN:zh_TW".to_string()),
        },
        sources::Model {
            subject_id: CHARLOTTE,
            service_id: "acfun.cn".to_string(),
            authorized: true,
            paid: 1,
            subject_url_id: Some("aa5020".to_string()),
            subtitle_locales: None,
        },
        sources::Model {
            subject_id: PRISMA_ILLYA,
            service_id: "bilibili.com_cn".to_string(),
            authorized: false,
            paid: 2,
            subject_url_id: Some("md1234".to_string()),
            subtitle_locales: Some("zh_CN".to_string()),
        },
    ] {
        source.into_active_model().insert(db).await.unwrap();
    }

    for link in [
        episodes::Model {
            subject_id: CHARLOTTE,
            episode_id: CHARLOTTE_EP1,
            service_id: "bilibili.com_cn".to_string(),
            episode_url_id: Some("BV1gs411S7R6".to_string()),
            video_url_id: None,
        },
        episodes::Model {
            subject_id: CHARLOTTE,
            episode_id: CHARLOTTE_EP1,
            service_id: "acfun.cn".to_string(),
            episode_url_id: Some("36188_1".to_string()),
            video_url_id: Some("ac1830245".to_string()),
        },
        episodes::Model {
            subject_id: CHARLOTTE,
            episode_id: CHARLOTTE_EP2,
            service_id: "bilibili.com_cn".to_string(),
            episode_url_id: Some("BV1gs411S7R7".to_string()),
            video_url_id: None,
        },
        episodes::Model {
            subject_id: CHARLOTTE,
            episode_id: ORPHAN_EPISODE,
            service_id: "bilibili.com_cn".to_string(),
            episode_url_id: Some("BV1orphan".to_string()),
            video_url_id: None,
        },
        episodes::Model {
            subject_id: PRISMA_ILLYA,
            episode_id: 300_001,
            service_id: "bilibili.com_cn".to_string(),
            episode_url_id: Some("BV1illya01".to_string()),
            video_url_id: None,
        },
    ] {
        link.into_active_model().insert(db).await.unwrap();
    }
}

pub async fn spawn_app_with(bangumi: Arc<dyn MetadataFetcher>) -> Router {
    let store = seeded_store().await;
    let shared = Arc::new(SharedState::from_parts(Config::default(), store, bangumi));
    let state = enhanced_bangumi::api::create_app_state(shared, None);
    enhanced_bangumi::api::router(state)
}

pub async fn spawn_app() -> Router {
    spawn_app_with(Arc::new(FakeBangumi::seeded())).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
