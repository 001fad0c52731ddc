use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O failure: {0}")]
    IoFailure(String),

    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::IoFailure(format!("{}: {}", path.display(), err))
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionFailure(msg.into())
    }

    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_io_failure(&self) -> bool {
        matches!(self, Self::IoFailure(_))
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::ConnectionFailure(_))
    }

    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_carries_path() {
        let err = DomainError::io(
            Path::new("/tmp/missing.jpg"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );

        assert!(err.is_io_failure());
        assert!(err.to_string().contains("/tmp/missing.jpg"));
    }

    #[test]
    fn test_predicates() {
        assert!(DomainError::not_found("x").is_not_found());
        assert!(DomainError::invalid_identifier("x").is_invalid_identifier());
        assert!(DomainError::connection("x").is_connection_failure());
        assert!(!DomainError::storage("x").is_not_found());
    }
}
