/// Version prefix every `api_ref` is rooted at.
pub const API_VERSION: &str = "v1";

pub mod templates {

    pub const BGM_SUBJECT_URL: &str = "https://bgm.tv/subject/";

    pub const MAL_ANIME_URL: &str = "https://myanimelist.net/anime/";

    pub const BGM_COVER_URL: &str = "https://lain.bgm.tv/pic/cover/c/";

    pub const BGM_COVER_EXTENSION: &str = ".jpg";
}

pub mod markers {

    /// Single-slot marker; also the subject slot of episode URL formats.
    pub const SUBJECT: &str = "%s";

    pub const EPISODE: &str = "%e";
}

pub mod bangumi {

    pub const DEFAULT_BASE_URL: &str = "https://api.bgm.tv";

    pub const SERVICE_NAME: &str = "Bangumi";
}
