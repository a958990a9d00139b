pub mod episode;
pub mod source;
pub mod subject;
