use sea_orm::FromQueryResult;

/// The bare episode binding of a service, without anything inherited from
/// its source. Joined against [`super::source::SourceRow`] in memory.
pub type EpisodeLinkRow = crate::entities::episodes::Model;

/// An episode source already joined with its source and service.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct EpisodeSourceRow {
    pub subject_id: i32,
    pub episode_id: i32,
    pub service_id: String,
    pub localized_name: String,
    pub authorized: bool,
    pub paid: i32,
    pub subject_url_id: Option<String>,
    pub episode_url_format: Option<String>,
    pub episode_url_id: Option<String>,
    pub video_url_format: Option<String>,
    pub video_url_id: Option<String>,
    pub subtitle_locales: Option<String>,
}
