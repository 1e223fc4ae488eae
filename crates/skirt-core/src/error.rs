use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkirtError {
    #[error("Topology error: {0}")]
    Topology(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, SkirtError>;
