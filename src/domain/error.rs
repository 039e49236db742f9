// src/domain/error.rs
use crate::domain::bookmark::BookmarkBuilderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid resource type: {0}")]
    InvalidResourceType(String),

    #[error("Invalid task filter: {0}")]
    InvalidTaskFilter(String),

    #[error("Bookmark operation failed: {0}")]
    BookmarkOperationFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Failed to serialize: {0}")]
    Serialization(String),

    #[error("Failed to deserialize: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl DomainError {
    /// Prefix the error message with some context, keeping the variant where possible.
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        let context = context.into();
        match self {
            DomainError::Storage(msg) => DomainError::Storage(format!("{}: {}", context, msg)),
            DomainError::SearchFailed(msg) => {
                DomainError::SearchFailed(format!("{}: {}", context, msg))
            }
            DomainError::Serialization(msg) => {
                DomainError::Serialization(format!("{}: {}", context, msg))
            }
            DomainError::Deserialization(msg) => {
                DomainError::Deserialization(format!("{}: {}", context, msg))
            }
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context, msg)),
            err => DomainError::Other(format!("{}: {}", context, err)),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<BookmarkBuilderError> for DomainError {
    fn from(e: BookmarkBuilderError) -> Self {
        DomainError::BookmarkOperationFailed(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            DomainError::Deserialization(e.to_string())
        } else {
            DomainError::Serialization(e.to_string())
        }
    }
}
