//! Error types for the core library

use thiserror::Error;

use crate::task::TaskId;

#[derive(Error, Debug)]
pub enum Error {
    /// A required field was missing or blank. Nothing was mutated.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create a Validation error for the given field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_))
    }

    /// The input field responsible for a validation failure, if any
    pub fn invalid_field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = Error::validation("title", "Title cannot be empty");
        assert_eq!(err.to_string(), "Invalid title: Title cannot be empty");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.invalid_field(), Some("title"));
    }

    #[test]
    fn test_not_found_error_display() {
        let err = Error::TaskNotFound(TaskId::new("abc"));
        assert_eq!(err.to_string(), "Task not found: abc");
        assert!(err.is_not_found());
        assert_eq!(err.invalid_field(), None);
    }
}
