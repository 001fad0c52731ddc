use crate::domain::DomainError;

/// Line-oriented operator input.
pub trait Prompter: Send + Sync {
    /// Shows `message` and returns the operator's answer without its line ending.
    fn prompt(&self, message: &str) -> Result<String, DomainError>;
}
