// src/cli/error.rs
use crate::application::error::ApplicationError;
use crate::domain::error::DomainError;
use crate::exitcode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation aborted by user")]
    OperationAborted,

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::OperationAborted => exitcode::CANCEL,
            CliError::CommandFailed(_) => exitcode::SOFTWARE,
            CliError::Application(ApplicationError::Storage { .. }) => exitcode::IOERR,
            CliError::Application(ApplicationError::Domain(DomainError::Io(_))) => {
                exitcode::IOERR
            }
            CliError::InvalidInput(_) | CliError::Application(_) => exitcode::USAGE,
        }
    }
}

// Direct conversion from DomainError to CliError (via ApplicationError)
impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Application(ApplicationError::Domain(err))
    }
}

pub type CliResult<T> = Result<T, CliError>;
