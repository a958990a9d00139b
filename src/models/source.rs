use sea_orm::FromQueryResult;

/// A source joined with its service: everything needed to shape a
/// subject-level source and to resolve URLs for its episode sources.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SourceRow {
    pub subject_id: i32,
    pub service_id: String,
    pub localized_name: String,
    pub authorized: bool,
    pub paid: i32,
    pub subject_url_format: Option<String>,
    pub subject_url_id: Option<String>,
    pub episode_url_format: Option<String>,
    pub video_url_format: Option<String>,
    pub subtitle_locales: Option<String>,
}
