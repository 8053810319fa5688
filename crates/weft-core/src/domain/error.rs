//! Domain-layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid library: {0}")]
    InvalidLibrary(String),

    #[error("Library '{name}' has no assets")]
    EmptyLibrary { name: String },

    #[error("Duplicate asset in library '{library}': {url}")]
    DuplicateAsset { library: String, url: String },

    #[error("Invalid asset URL '{url}': {reason}")]
    InvalidAssetUrl { url: String, reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Library '{name}' (required by '{required_by}') is not registered")]
    UnknownLibrary { name: String, required_by: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLibrary(msg) => vec![
                "Check the library definition".into(),
                format!("Details: {}", msg),
            ],
            Self::EmptyLibrary { name } => vec![
                format!("Library '{}' declares no JS or CSS assets", name),
                "Add at least one script() or stylesheet() to its builder".into(),
            ],
            Self::DuplicateAsset { library, url } => vec![
                format!("'{}' is listed twice in library '{}'", url, library),
                "Remove the duplicate entry".into(),
            ],
            Self::UnknownLibrary { name, required_by } => vec![
                format!("'{}' depends on '{}', which is not registered", required_by, name),
                format!("Register '{}' first, then retry", name),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLibrary(_)
            | Self::EmptyLibrary { .. }
            | Self::DuplicateAsset { .. }
            | Self::InvalidAssetUrl { .. } => ErrorCategory::Validation,
            Self::UnknownLibrary { .. } => ErrorCategory::NotFound,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
