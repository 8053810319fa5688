//! Web libraries: named bundles of JS/CSS assets.
//!
//! A [`WebLibrary`] is what the original framework calls a "web library":
//! a set of script and stylesheet URLs that a page pulls in together
//! (think jquery, bootstrap), optionally depending on other libraries.
//!
//! Libraries are built through [`WebLibraryBuilder`], which validates at
//! `build()` so that an instance in hand is always well-formed.

use crate::domain::entities::common::Asset;
use crate::domain::error::DomainError;
use crate::domain::validation::DomainValidator;

/// A named, validated bundle of web assets.
#[derive(Debug, Clone, PartialEq)]
pub struct WebLibrary {
    name: String,
    assets: Vec<Asset>,
    dependencies: Vec<String>,
}

impl WebLibrary {
    /// Start building a library with the given name.
    pub fn builder(name: impl Into<String>) -> WebLibraryBuilder {
        WebLibraryBuilder {
            name: name.into(),
            assets: Vec::new(),
            errors: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Names of libraries that must be registered before this one.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// Builder for [`WebLibrary`].
///
/// Asset URLs are checked lazily: invalid URLs are collected and reported
/// from `build()`, so call sites can chain without `?` on every line.
#[derive(Debug)]
pub struct WebLibraryBuilder {
    name: String,
    assets: Vec<Asset>,
    errors: Vec<DomainError>,
    dependencies: Vec<String>,
}

impl WebLibraryBuilder {
    /// Add a head script.
    pub fn script(mut self, url: impl Into<String>) -> Self {
        match Asset::script(url) {
            Ok(asset) => self.assets.push(asset),
            Err(e) => self.errors.push(e),
        }
        self
    }

    /// Add a script deferred to the end of the body.
    pub fn deferred_script(mut self, url: impl Into<String>) -> Self {
        match Asset::deferred_script(url) {
            Ok(asset) => self.assets.push(asset),
            Err(e) => self.errors.push(e),
        }
        self
    }

    /// Add a stylesheet.
    pub fn stylesheet(mut self, url: impl Into<String>) -> Self {
        match Asset::stylesheet(url) {
            Ok(asset) => self.assets.push(asset),
            Err(e) => self.errors.push(e),
        }
        self
    }

    /// Add a pre-built asset.
    pub fn asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    /// Declare a dependency on another library by name.
    pub fn requires(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    /// Validate and build the library.
    pub fn build(mut self) -> Result<WebLibrary, DomainError> {
        if let Some(err) = self.errors.drain(..).next() {
            return Err(err);
        }

        let library = WebLibrary {
            name: self.name,
            assets: self.assets,
            dependencies: self.dependencies,
        };
        DomainValidator::validate_library(&library)?;
        Ok(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{AssetKind, Placement};

    #[test]
    fn builds_a_valid_library() {
        let lib = WebLibrary::builder("jquery")
            .script("js/jquery.min.js")
            .build()
            .unwrap();
        assert_eq!(lib.name(), "jquery");
        assert_eq!(lib.assets().len(), 1);
        assert_eq!(lib.assets()[0].kind(), AssetKind::Script);
        assert!(lib.dependencies().is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = WebLibrary::builder("")
            .script("js/app.js")
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "name" });
    }

    #[test]
    fn library_without_assets_is_rejected() {
        let err = WebLibrary::builder("empty").build().unwrap_err();
        assert_eq!(err, DomainError::EmptyLibrary { name: "empty".into() });
    }

    #[test]
    fn duplicate_urls_are_rejected() {
        let err = WebLibrary::builder("dup")
            .script("js/app.js")
            .deferred_script("js/app.js")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateAsset { .. }));
    }

    #[test]
    fn invalid_urls_surface_from_build() {
        let err = WebLibrary::builder("broken")
            .script("js/good.js")
            .stylesheet("css/bad file.css")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidAssetUrl { .. }));
    }

    #[test]
    fn dependencies_keep_declaration_order() {
        let lib = WebLibrary::builder("app")
            .requires("jquery")
            .requires("bootstrap")
            .deferred_script("js/app.js")
            .build()
            .unwrap();
        assert_eq!(lib.dependencies(), ["jquery", "bootstrap"]);
        assert_eq!(lib.assets()[0].placement(), Placement::BodyEnd);
    }
}
