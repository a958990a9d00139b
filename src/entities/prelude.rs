pub use super::episodes::Entity as Episodes;
pub use super::services::Entity as Services;
pub use super::sources::Entity as Sources;
pub use super::subjects::Entity as Subjects;
