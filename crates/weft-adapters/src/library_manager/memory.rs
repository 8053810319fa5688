//! In-memory web library manager.

use std::{
    collections::HashSet,
    sync::{Arc, RwLock},
};

use tracing::debug;

use weft_core::{
    application::ApplicationError,
    domain::{
        AssetKind, DomainError, DomainValidator, Placement, WebLibrary, WebLibraryManager,
    },
    error::WeftResult,
};

/// Thread-safe in-memory registry of web libraries.
///
/// Registration order is emission order. Registering an already-known
/// name is a no-op; registering a library whose dependency is missing
/// fails with [`DomainError::UnknownLibrary`].
#[derive(Clone, Default)]
pub struct InMemoryLibraryManager {
    inner: Arc<RwLock<Vec<WebLibrary>>>,
}

impl InMemoryLibraryManager {
    /// Create a new empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of registered libraries.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if no libraries are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn emit(&self, placement: Placement) -> WeftResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::ManagerLockError)?;

        let mut seen = HashSet::new();
        let mut out = String::new();
        for library in inner.iter() {
            for asset in library.assets() {
                if asset.placement() != placement {
                    continue;
                }
                if !seen.insert(asset.url().as_str().to_string()) {
                    continue;
                }
                match asset.kind() {
                    AssetKind::Stylesheet => {
                        out.push_str("<link rel=\"stylesheet\" href=\"");
                        out.push_str(asset.url().as_str());
                        out.push_str("\">\n");
                    }
                    AssetKind::Script => {
                        out.push_str("<script src=\"");
                        out.push_str(asset.url().as_str());
                        out.push_str("\"></script>\n");
                    }
                }
            }
        }
        Ok(out)
    }
}

impl WebLibraryManager for InMemoryLibraryManager {
    fn register(&self, library: WebLibrary) -> WeftResult<()> {
        // Validate before insertion
        DomainValidator::validate_library(&library)
            .map_err(weft_core::error::WeftError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ManagerLockError)?;

        if inner.iter().any(|l| l.name() == library.name()) {
            debug!(name = library.name(), "library already registered, skipping");
            return Ok(());
        }

        for dependency in library.dependencies() {
            if !inner.iter().any(|l| l.name() == dependency.as_str()) {
                return Err(DomainError::UnknownLibrary {
                    name: dependency.clone(),
                    required_by: library.name().to_string(),
                }
                .into());
            }
        }

        inner.push(library);
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.inner
            .read()
            .map(|inner| inner.iter().any(|l| l.name() == name))
            .unwrap_or(false)
    }

    fn head_html(&self) -> WeftResult<String> {
        self.emit(Placement::Head)
    }

    fn body_end_html(&self) -> WeftResult<String> {
        self.emit(Placement::BodyEnd)
    }
}
