//! Turns service URL formats into concrete links.
//!
//! Formats carry `%s` (subject or video fragment) and, for episode pages,
//! `%e`. Only the first occurrence of a marker is substituted. Empty
//! fragments and empty formats count as absent.

use crate::constants::markers;

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolves a single-slot format (subject and video URLs).
///
/// Returns `None` when there is no format, or when the format has a marker
/// but no fragment to fill it with. A format without a marker is returned
/// verbatim.
#[must_use]
pub fn resolve_single(format: Option<&str>, id: Option<&str>) -> Option<String> {
    let format = present(format)?;

    match present(id) {
        Some(id) => Some(format.replacen(markers::SUBJECT, id, 1)),
        None if !format.contains(markers::SUBJECT) => Some(format.to_string()),
        None => None,
    }
}

/// Resolves an episode page format.
///
/// Each marker is filled only when its fragment is present; unfilled
/// markers stay in the result as-is.
#[must_use]
pub fn resolve_episode(
    format: Option<&str>,
    episode_id: Option<&str>,
    subject_id: Option<&str>,
) -> Option<String> {
    let format = present(format)?;
    let mut url = format.to_string();

    if let Some(episode_id) = present(episode_id)
        && format.contains(markers::EPISODE)
    {
        url = url.replacen(markers::EPISODE, episode_id, 1);
    }

    if let Some(subject_id) = present(subject_id)
        && format.contains(markers::SUBJECT)
    {
        url = url.replacen(markers::SUBJECT, subject_id, 1);
    }

    Some(url)
}
