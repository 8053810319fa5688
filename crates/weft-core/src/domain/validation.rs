//! Domain validation rules, kept out of the entity definitions so the
//! same checks can run at builder time and at registration time.

use std::collections::HashSet;

use crate::domain::entities::web_library::WebLibrary;
use crate::domain::error::DomainError;

/// Namespace for domain validation functions.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a single library definition.
    ///
    /// Rules:
    /// - name is non-empty and contains no whitespace
    /// - at least one asset
    /// - no duplicate asset URLs within the library
    /// - no self-dependency
    pub fn validate_library(library: &WebLibrary) -> Result<(), DomainError> {
        if library.name().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        if library.name().chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidLibrary(format!(
                "library name '{}' contains whitespace",
                library.name()
            )));
        }
        if library.assets().is_empty() {
            return Err(DomainError::EmptyLibrary {
                name: library.name().to_string(),
            });
        }

        let mut seen = HashSet::new();
        for asset in library.assets() {
            if !seen.insert(asset.url().as_str()) {
                return Err(DomainError::DuplicateAsset {
                    library: library.name().to_string(),
                    url: asset.url().to_string(),
                });
            }
        }

        if library.dependencies().iter().any(|d| d == library.name()) {
            return Err(DomainError::InvalidLibrary(format!(
                "library '{}' depends on itself",
                library.name()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::web_library::WebLibrary;

    #[test]
    fn whitespace_in_name_is_rejected() {
        let err = WebLibrary::builder("my lib")
            .script("js/app.js")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidLibrary(_)));
    }

    #[test]
    fn self_dependency_is_rejected() {
        let err = WebLibrary::builder("loop")
            .script("js/loop.js")
            .requires("loop")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidLibrary(_)));
    }
}
