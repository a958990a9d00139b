pub mod prelude;

pub mod episodes;
pub mod services;
pub mod sources;
pub mod subjects;
