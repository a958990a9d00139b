//! Strongly typed identifiers for catalog records.
//!
//! Subject and episode ids share the numeric id space of the Bangumi API but
//! must never be mixed up, hence the newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A path segment that is not a strict base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed {kind} identifier: '{raw}'")]
pub struct MalformedId {
    pub kind: &'static str,
    pub raw: String,
}

/// Optional `-` followed by ASCII digits, within `i32`.
///
/// A leading `+` is rejected. Digit strings past `i32::MAX` are reported as
/// malformed too: the catalog stores ids as 32-bit integers, so no such
/// record can exist.
fn parse_strict(kind: &'static str, raw: &str) -> Result<i32, MalformedId> {
    let malformed = || MalformedId {
        kind,
        raw: raw.to_string(),
    };

    if raw.starts_with('+') {
        return Err(malformed());
    }
    raw.parse::<i32>().map_err(|_| malformed())
}

/// Identifier of a subject (a title) on Bangumi.
///
/// # Examples
///
/// ```rust
/// use enhanced_bangumi::domain::SubjectId;
///
/// let id: SubjectId = "120925".parse().unwrap();
/// assert_eq!(id.value(), 120925);
/// assert!("12ab".parse::<SubjectId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(i32);

impl SubjectId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl FromStr for SubjectId {
    type Err = MalformedId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("subject", s).map(Self)
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SubjectId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Identifier of an episode in the Bangumi id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(i32);

impl EpisodeId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl FromStr for EpisodeId {
    type Err = MalformedId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("episode", s).map(Self)
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EpisodeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Identifier of a distribution service, e.g. `bilibili.com_cn`.
///
/// Service ids are opaque strings and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_id_parses_plain_integers() {
        let id: SubjectId = "120925".parse().unwrap();
        assert_eq!(id, SubjectId::new(120_925));
        assert_eq!(id.to_string(), "120925");
    }

    #[test]
    fn subject_id_rejects_non_numeric() {
        let err = "test".parse::<SubjectId>().unwrap_err();
        assert_eq!(err.kind, "subject");
        assert_eq!(err.raw, "test");
        assert_eq!(err.to_string(), "Malformed subject identifier: 'test'");
    }

    #[test]
    fn parsing_is_strict() {
        // Trailing garbage is not silently truncated.
        assert!("541642abc".parse::<EpisodeId>().is_err());
        assert!(" 541642".parse::<EpisodeId>().is_err());
        assert!("".parse::<EpisodeId>().is_err());
        assert!("1.5".parse::<EpisodeId>().is_err());
    }

    #[test]
    fn explicit_plus_sign_is_malformed() {
        let err = "+120925".parse::<SubjectId>().unwrap_err();
        assert_eq!(err.raw, "+120925");
        assert!("+541642".parse::<EpisodeId>().is_err());
    }

    #[test]
    fn ids_outside_i32_are_malformed() {
        assert_eq!(
            "2147483647".parse::<SubjectId>().unwrap().value(),
            i32::MAX
        );
        assert!("2147483648".parse::<SubjectId>().is_err());
        assert!("99999999999999999999".parse::<EpisodeId>().is_err());
    }

    #[test]
    fn negative_ids_parse_and_simply_match_nothing() {
        assert_eq!("-3".parse::<SubjectId>().unwrap().value(), -3);
    }

    #[test]
    fn service_id_serializes_transparently() {
        let id = ServiceId::new("bilibili.com_cn");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"bilibili.com_cn\""
        );
    }
}
