pub mod episode_source;
pub mod source;
pub mod subject;
