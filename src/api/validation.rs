use super::ApiError;
use crate::domain::{EpisodeId, ServiceId, SubjectId};

pub fn parse_subject_id(raw: &str) -> Result<SubjectId, ApiError> {
    Ok(raw.parse()?)
}

pub fn parse_episode_id(raw: &str) -> Result<EpisodeId, ApiError> {
    Ok(raw.parse()?)
}

/// Service ids are opaque strings; anything routable is accepted.
pub fn parse_service_id(raw: String) -> ServiceId {
    ServiceId::new(raw)
}
