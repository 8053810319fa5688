//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while assembling or rendering a page.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A renderer (or a whole chain) could not produce markup.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Library manager access failed (lock poisoned).
    #[error("Web library manager is unavailable")]
    ManagerLockError,

    /// A library manifest could not be read or parsed.
    #[error("Manifest error at {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { reason } => vec![
                format!("Rendering failed: {}", reason),
                "Check which renderers are installed in the chain".into(),
                "An element with no matching renderer can still render itself".into(),
            ],
            Self::ManagerLockError => vec![
                "The web library manager is locked".into(),
                "A writer panicked while holding the lock; restart the page build".into(),
            ],
            Self::ManifestError { path, .. } => vec![
                format!("Failed to load: {}", path.display()),
                "Check that the file exists and is valid TOML".into(),
                "See the libraries.toml format in the loader docs".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::ManagerLockError => ErrorCategory::Internal,
            Self::ManifestError { .. } => ErrorCategory::Configuration,
        }
    }
}
