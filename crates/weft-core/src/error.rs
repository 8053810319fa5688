//! Unified error handling for Weft Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Weft Core operations.
///
/// This enum wraps all possible errors that can occur when using weft-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum WeftError {
    /// Errors from the domain layer (invalid libraries, asset URLs, ...).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (rendering and orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl WeftError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your template setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Weft".into(),
                "Please report it with the full error message".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::ManagerLockError))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type WeftResult<T> = Result<T, WeftError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> WeftResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> WeftResult<T> {
        self.map_err(|e| WeftError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_category() {
        let err = WeftError::from(DomainError::UnknownLibrary {
            name: "jquery".into(),
            required_by: "bootstrap".into(),
        });
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn lock_errors_are_retryable() {
        let err = WeftError::from(ApplicationError::ManagerLockError);
        assert!(err.is_retryable());
        assert!(!WeftError::Internal { message: "x".into() }.is_retryable());
    }

    #[test]
    fn context_wraps_foreign_errors() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = io.context("reading manifest").unwrap_err();
        assert!(matches!(err, WeftError::Internal { .. }));
        assert!(err.to_string().contains("reading manifest"));
    }
}
