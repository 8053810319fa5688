//! Library Service - web library management operations.
//!
//! Thin facade over a shared [`WebLibraryManager`], so callers register
//! libraries and query emission without holding the manager type.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::capabilities::WebLibraryManager;
use crate::domain::entities::web_library::WebLibrary;
use crate::error::WeftResult;

/// Service for registering and emitting web libraries.
pub struct LibraryService {
    manager: Arc<dyn WebLibraryManager>,
}

impl LibraryService {
    /// Create a new library service over the given manager.
    pub fn new(manager: Arc<dyn WebLibraryManager>) -> Self {
        Self { manager }
    }

    /// The underlying manager handle, for sharing with a template config.
    pub fn manager(&self) -> Arc<dyn WebLibraryManager> {
        Arc::clone(&self.manager)
    }

    /// Register one library.
    pub fn register(&self, library: WebLibrary) -> WeftResult<()> {
        self.manager.register(library)
    }

    /// Register several libraries in order.
    ///
    /// Order matters: a library's dependencies must come before it.
    #[instrument(skip_all, fields(count = libraries.len()))]
    pub fn register_all(&self, libraries: Vec<WebLibrary>) -> WeftResult<()> {
        for library in libraries {
            self.manager.register(library)?;
        }
        Ok(())
    }

    /// Whether a library is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.manager.contains(name)
    }

    /// HTML for the document head.
    pub fn head_html(&self) -> WeftResult<String> {
        self.manager.head_html()
    }

    /// HTML for the end of the body.
    pub fn body_end_html(&self) -> WeftResult<String> {
        self.manager.body_end_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Manager {}

        impl WebLibraryManager for Manager {
            fn register(&self, library: WebLibrary) -> WeftResult<()>;
            fn contains(&self, name: &str) -> bool;
            fn head_html(&self) -> WeftResult<String>;
            fn body_end_html(&self) -> WeftResult<String>;
        }
    }

    fn lib(name: &str) -> WebLibrary {
        WebLibrary::builder(name)
            .script(format!("js/{name}.js"))
            .build()
            .unwrap()
    }

    #[test]
    fn register_all_forwards_in_order() {
        let mut manager = MockManager::new();
        let mut seq = mockall::Sequence::new();
        for name in ["jquery", "bootstrap"] {
            let expected = lib(name);
            manager
                .expect_register()
                .with(eq(expected))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }

        let service = LibraryService::new(Arc::new(manager));
        service
            .register_all(vec![lib("jquery"), lib("bootstrap")])
            .unwrap();
    }

    #[test]
    fn queries_delegate_to_the_manager() {
        let mut manager = MockManager::new();
        manager
            .expect_contains()
            .with(eq("jquery"))
            .return_const(true);
        manager
            .expect_head_html()
            .returning(|| Ok("<link>".to_string()));

        let service = LibraryService::new(Arc::new(manager));
        assert!(service.contains("jquery"));
        assert_eq!(service.head_html().unwrap(), "<link>");
    }
}
