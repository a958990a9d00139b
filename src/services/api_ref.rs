//! Self-referencing paths placed in `api_ref` fields.

use crate::constants::API_VERSION;
use std::fmt::Display;

#[must_use]
pub fn subject(subject_id: impl Display) -> String {
    format!("/{API_VERSION}/subjects/{subject_id}")
}

#[must_use]
pub fn episode(subject_id: impl Display, episode_id: impl Display) -> String {
    format!("/{API_VERSION}/subjects/{subject_id}/eps/{episode_id}")
}

#[must_use]
pub fn subject_source(subject_id: impl Display, service_id: impl Display) -> String {
    format!("/{API_VERSION}/subjects/{subject_id}/sources/{service_id}")
}

#[must_use]
pub fn episode_source(
    subject_id: impl Display,
    episode_id: impl Display,
    service_id: impl Display,
) -> String {
    format!("/{API_VERSION}/subjects/{subject_id}/eps/{episode_id}/sources/{service_id}")
}
