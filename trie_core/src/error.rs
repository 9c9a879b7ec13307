use crate::DocumentId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No document was ever stored under this id.
    #[error("document {0} not found")]
    NotFound(DocumentId),
}

pub type Result<T> = std::result::Result<T, SearchError>;
