use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn external(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedOutput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
