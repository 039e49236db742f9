// src/application/error.rs
use crate::domain::error::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// The in-memory change was applied but could not be written to storage.
    #[error("Failed to persist {key}: {source}")]
    Storage {
        key: String,
        #[source]
        source: DomainError,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    Other(String),
}

impl ApplicationError {
    pub fn is_storage(&self) -> bool {
        matches!(self, ApplicationError::Storage { .. })
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
