//! Built-in web library definitions.
//!
//! A small catalog of common libraries so demos and tests don't have to
//! hand-write manifests. URLs are CDN-relative defaults; applications
//! with their own asset pipeline define libraries via
//! [`TomlLibraryLoader`](crate::library_loader::TomlLibraryLoader)
//! instead.

use weft_core::domain::{DomainError, WebLibrary};

/// jQuery, head-loaded.
pub fn jquery() -> Result<WebLibrary, DomainError> {
    WebLibrary::builder("jquery")
        .script("https://code.jquery.com/jquery-3.7.1.min.js")
        .build()
}

/// Bootstrap CSS + JS bundle; depends on jquery.
pub fn bootstrap() -> Result<WebLibrary, DomainError> {
    WebLibrary::builder("bootstrap")
        .requires("jquery")
        .stylesheet("https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css")
        .deferred_script("https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js")
        .build()
}

/// All built-in libraries, in dependency order.
pub fn all_libraries() -> Result<Vec<WebLibrary>, DomainError> {
    Ok(vec![jquery()?, bootstrap()?])
}
