//! Shapes stored rows into their public representation.
//!
//! Every function consumes its row: the fields a view is computed from are
//! gone once the view exists, so a record cannot be shaped twice. The
//! by-value signatures are what enforces shaping exactly once per record.
//!
//! Shapers never set `api_ref`; the collection a view is served in decides
//! whether it links to itself.

use crate::api::types::{EpisodeSourceDto, SubjectDto, SubjectSourceDto};
use crate::constants::templates;
use crate::models::episode::{EpisodeLinkRow, EpisodeSourceRow};
use crate::models::source::SourceRow;
use crate::models::subject::SubjectRow;
use crate::services::url_template::{resolve_episode, resolve_single};

/// Splits a colon separated locale list.
///
/// An absent list yields `[""]`, not `[]`; clients have been relying on
/// that shape.
#[must_use]
pub fn split_subtitle_locales(locales: Option<&str>) -> Vec<String> {
    locales
        .unwrap_or_default()
        .split(':')
        .map(str::to_string)
        .collect()
}

/// Adds the Bangumi, MyAnimeList and cover links and drops `mal_id`.
#[must_use]
pub fn shape_subject(row: SubjectRow) -> SubjectDto {
    SubjectDto {
        bgm_url: format!("{}{}", templates::BGM_SUBJECT_URL, row.id),
        mal_url: row
            .mal_id
            .filter(|id| *id != 0)
            .map(|id| format!("{}{id}", templates::MAL_ANIME_URL)),
        bgm_image_url: row
            .bgm_image_url
            .filter(|path| !path.is_empty())
            .map(|path| {
                format!(
                    "{}{path}{}",
                    templates::BGM_COVER_URL,
                    templates::BGM_COVER_EXTENSION
                )
            }),
        id: row.id,
        name_jp: row.name_jp,
        name_cn: row.name_cn,
        name_en: row.name_en,
        website: row.website,
        on_air_date: row.on_air_date,
        api_ref: None,
    }
}

#[must_use]
pub fn shape_subject_source(row: SourceRow) -> SubjectSourceDto {
    SubjectSourceDto {
        subject_url: resolve_single(
            row.subject_url_format.as_deref(),
            row.subject_url_id.as_deref(),
        ),
        subtitle_locales: split_subtitle_locales(row.subtitle_locales.as_deref()),
        api_ref: None,
        service_id: row.service_id,
        localized_name: row.localized_name,
        authorized: row.authorized,
        paid: row.paid,
    }
}

#[must_use]
pub fn shape_episode_source(row: EpisodeSourceRow) -> EpisodeSourceDto {
    EpisodeSourceDto {
        episode_url: resolve_episode(
            row.episode_url_format.as_deref(),
            row.episode_url_id.as_deref(),
            row.subject_url_id.as_deref(),
        ),
        video_url: resolve_single(row.video_url_format.as_deref(), row.video_url_id.as_deref()),
        subtitle_locales: split_subtitle_locales(row.subtitle_locales.as_deref()),
        api_ref: None,
        service_id: row.service_id,
        localized_name: row.localized_name,
        authorized: row.authorized,
        paid: row.paid,
    }
}

/// Shapes an episode binding using the templates and service details of
/// the source it belongs to.
#[must_use]
pub fn shape_linked_episode_source(link: EpisodeLinkRow, source: &SourceRow) -> EpisodeSourceDto {
    EpisodeSourceDto {
        episode_url: resolve_episode(
            source.episode_url_format.as_deref(),
            link.episode_url_id.as_deref(),
            source.subject_url_id.as_deref(),
        ),
        video_url: resolve_single(
            source.video_url_format.as_deref(),
            link.video_url_id.as_deref(),
        ),
        subtitle_locales: split_subtitle_locales(source.subtitle_locales.as_deref()),
        api_ref: None,
        service_id: link.service_id,
        localized_name: source.localized_name.clone(),
        authorized: source.authorized,
        paid: source.paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    fn charlotte() -> SubjectRow {
        SubjectRow {
            id: 120_925,
            name_jp: Some("Charlotte".into()),
            name_cn: Some("Charlotte".into()),
            name_en: Some("Charlotte".into()),
            mal_id: Some(28_999),
            website: Some("https://charlotte-anime.jp/".into()),
            on_air_date: Some(Utc.with_ymd_and_hms(2015, 7, 4, 15, 0, 0).unwrap()),
            bgm_image_url: Some("9b/d6/120925_Zp040".into()),
        }
    }

    fn bilibili_source() -> SourceRow {
        SourceRow {
            subject_id: 120_925,
            service_id: "bilibili.com_cn".into(),
            localized_name: "哔哩哔哩".into(),
            authorized: true,
            paid: 0,
            subject_url_format: Some("https://www.bilibili.com/bangumi/media/%s/".into()),
            subject_url_id: Some("md2572".into()),
            episode_url_format: Some("https://www.bilibili.com/video/%e".into()),
            video_url_format: None,
            subtitle_locales: Some("zh_CN".into()),
        }
    }

    fn keys(value: &serde_json::Value) -> BTreeSet<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn split_subtitle_locales_on_colons() {
        assert_eq!(
            split_subtitle_locales(Some("zh_CN:zh_TW:ja")),
            vec!["zh_CN", "zh_TW", "ja"]
        );
        assert_eq!(split_subtitle_locales(Some("zh_CN")), vec!["zh_CN"]);
    }

    #[test]
    fn absent_subtitle_locales_keep_the_single_empty_entry() {
        assert_eq!(split_subtitle_locales(None), vec![String::new()]);
        assert_eq!(split_subtitle_locales(Some("")), vec![String::new()]);
    }

    #[test]
    fn shape_subject_derives_links() {
        let dto = shape_subject(charlotte());

        assert_eq!(dto.bgm_url, "https://bgm.tv/subject/120925");
        assert_eq!(
            dto.mal_url.as_deref(),
            Some("https://myanimelist.net/anime/28999")
        );
        assert_eq!(
            dto.bgm_image_url.as_deref(),
            Some("https://lain.bgm.tv/pic/cover/c/9b/d6/120925_Zp040.jpg")
        );
        assert!(dto.api_ref.is_none());

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("mal_id").is_none());
        assert!(json.get("api_ref").is_none());
        assert_eq!(json["on_air_date"], "2015-07-04T15:00:00.000Z");
    }

    #[test]
    fn shape_subject_without_optional_references() {
        let mut row = charlotte();
        row.mal_id = None;
        row.bgm_image_url = None;

        let dto = shape_subject(row);
        assert!(dto.mal_url.is_none());
        assert!(dto.bgm_image_url.is_none());
    }

    #[test]
    fn shape_subject_source_resolves_subject_url() {
        let dto = shape_subject_source(bilibili_source());

        assert_eq!(
            dto.subject_url.as_deref(),
            Some("https://www.bilibili.com/bangumi/media/md2572/")
        );
        assert_eq!(dto.subtitle_locales, vec!["zh_CN"]);
        assert!(dto.api_ref.is_none());
    }

    #[test]
    fn shape_subject_source_swaps_internal_fields_for_derived_ones() {
        let row = bilibili_source();
        let input_keys: BTreeSet<String> = [
            "subject_id",
            "service_id",
            "localized_name",
            "authorized",
            "paid",
            "subject_url_format",
            "subject_url_id",
            "episode_url_format",
            "video_url_format",
            "subtitle_locales",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let output = keys(&serde_json::to_value(shape_subject_source(row)).unwrap());

        let removed: BTreeSet<_> = input_keys.difference(&output).cloned().collect();

        // the raw colon separated `subtitle_locales` is consumed and replaced
        // by the split list of the same name
        let mut carried_over = input_keys.clone();
        carried_over.remove("subtitle_locales");
        let added: BTreeSet<_> = output.difference(&carried_over).cloned().collect();

        let expected_removed: BTreeSet<String> = [
            "subject_id",
            "subject_url_format",
            "subject_url_id",
            "episode_url_format",
            "video_url_format",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(removed, expected_removed);

        let expected_added: BTreeSet<String> = ["subject_url", "subtitle_locales"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(added, expected_added);
        assert!(!output.contains("api_ref"));

        let json = serde_json::to_value(shape_subject_source(bilibili_source())).unwrap();
        assert!(json["subtitle_locales"].is_array());
    }

    #[test]
    fn shape_episode_source_resolves_both_urls() {
        let row = EpisodeSourceRow {
            subject_id: 120_925,
            episode_id: 541_642,
            service_id: "bilibili.com_cn".into(),
            localized_name: "哔哩哔哩".into(),
            authorized: true,
            paid: 0,
            subject_url_id: Some("md2572".into()),
            episode_url_format: Some("https://www.bilibili.com/video/%e".into()),
            episode_url_id: Some("BV1gs411S7R6".into()),
            video_url_format: None,
            video_url_id: None,
            subtitle_locales: Some("zh_CN".into()),
        };

        let dto = shape_episode_source(row);
        assert_eq!(
            dto.episode_url.as_deref(),
            Some("https://www.bilibili.com/video/BV1gs411S7R6")
        );
        assert!(dto.video_url.is_none());
        assert!(dto.api_ref.is_none());

        let json = serde_json::to_value(&dto).unwrap();
        for internal in [
            "subject_url_id",
            "episode_url_format",
            "episode_url_id",
            "video_url_format",
            "video_url_id",
            "episode_id",
        ] {
            assert!(json.get(internal).is_none(), "{internal} leaked");
        }
    }

    #[test]
    fn linked_episode_source_borrows_from_its_source() {
        let source = SourceRow {
            video_url_format: Some("https://player.example/%s".into()),
            ..bilibili_source()
        };
        let link = EpisodeLinkRow {
            subject_id: 120_925,
            episode_id: 541_642,
            service_id: "bilibili.com_cn".into(),
            episode_url_id: Some("BV1gs411S7R6".into()),
            video_url_id: Some("av123".into()),
        };

        let dto = shape_linked_episode_source(link, &source);
        assert_eq!(
            dto.episode_url.as_deref(),
            Some("https://www.bilibili.com/video/BV1gs411S7R6")
        );
        assert_eq!(dto.video_url.as_deref(), Some("https://player.example/av123"));
        assert_eq!(dto.localized_name, "哔哩哔哩");
        assert_eq!(dto.subtitle_locales, vec!["zh_CN"]);
        assert!(dto.api_ref.is_none());
    }
}
