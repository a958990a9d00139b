/// A subject row exactly as stored.
pub type SubjectRow = crate::entities::subjects::Model;
