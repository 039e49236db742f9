use crate::domain::error::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Implement conversion from infrastructure errors to domain errors
impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Network(msg) => DomainError::SearchFailed(msg),
            InfrastructureError::Serialization(msg) => DomainError::Serialization(msg),
            InfrastructureError::FileSystem(msg) => DomainError::Storage(msg),
            InfrastructureError::Configuration(msg) => DomainError::Other(msg),
        }
    }
}

impl From<reqwest::Error> for InfrastructureError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            InfrastructureError::Serialization(error.to_string())
        } else {
            InfrastructureError::Network(error.to_string())
        }
    }
}
