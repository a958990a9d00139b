use crate::clients::bangumi::BgmEpisode;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    pub stack: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectDto {
    pub id: i32,
    pub name_jp: Option<String>,
    pub name_cn: Option<String>,
    pub name_en: Option<String>,
    pub website: Option<String>,
    #[serde(serialize_with = "serialize_millis")]
    pub on_air_date: Option<DateTime<Utc>>,
    pub bgm_url: String,
    pub mal_url: Option<String>,
    pub bgm_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
}

/// A subject merged with its Bangumi episodes and its sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectDetailDto {
    #[serde(flatten)]
    pub subject: SubjectDto,
    pub summary: Option<String>,
    pub eps: Vec<EpisodeDto>,
    pub sources: Vec<SubjectSourceDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeDto {
    #[serde(flatten)]
    pub episode: BgmEpisode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
    pub sources: Vec<EpisodeSourceDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectSourceDto {
    pub service_id: String,
    pub localized_name: String,
    pub authorized: bool,
    pub paid: i32,
    pub subtitle_locales: Vec<String>,
    pub subject_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeSourceDto {
    pub service_id: String,
    pub localized_name: String,
    pub authorized: bool,
    pub paid: i32,
    pub subtitle_locales: Vec<String>,
    pub episode_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
}

/// Timestamps go out as `2015-07-04T15:00:00.000Z`.
fn serialize_millis<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}
