//! Filesystem-based web library loader.
//!
//! Parses `libraries.toml` manifests into validated [`WebLibrary`] values,
//! ready for registration with a [`WebLibraryManager`].
//!
//! # `libraries.toml` format
//!
//! ```toml
//! [[library]]
//! name = "jquery"
//!
//! [[library.asset]]
//! url  = "js/jquery.min.js"
//! kind = "script"             # script | stylesheet
//!
//! [[library]]
//! name     = "bootstrap"
//! requires = ["jquery"]       # optional; must be registered first
//!
//! [[library.asset]]
//! url  = "css/bootstrap.min.css"
//! kind = "stylesheet"
//!
//! [[library.asset]]
//! url       = "js/bootstrap.min.js"
//! kind      = "script"
//! placement = "body-end"      # optional; head | body-end (scripts only)
//! ```
//!
//! Libraries appear in the returned `Vec` in manifest order, so a manifest
//! that lists dependencies before dependents can be fed straight into
//! `LibraryService::register_all`.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use weft_core::{
    application::ApplicationError,
    domain::{Asset, AssetKind, Placement, WebLibrary},
    error::WeftResult,
};

/// The manifest file name [`TomlLibraryLoader::load_dir`] looks for.
pub const MANIFEST_FILE: &str = "libraries.toml";

// ── Manifest types ───────────────────────────────────────────────────────

/// Deserialised representation of a `libraries.toml` file.
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    library: Vec<LibraryManifest>,
}

#[derive(Debug, Deserialize)]
struct LibraryManifest {
    name: String,
    #[serde(default)]
    requires: Vec<String>,
    #[serde(default)]
    asset: Vec<AssetManifest>,
}

#[derive(Debug, Deserialize)]
struct AssetManifest {
    url: String,
    kind: AssetKind,
    #[serde(default)]
    placement: Placement,
}

// ── Loader ───────────────────────────────────────────────────────────────

/// Loads web library definitions from TOML manifests.
#[derive(Debug, Default)]
pub struct TomlLibraryLoader;

impl TomlLibraryLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load all libraries from a single manifest file.
    #[instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn load_file(&self, path: impl AsRef<Path>) -> WeftResult<Vec<WebLibrary>> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::ManifestError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let manifest: Manifest =
            toml::from_str(&raw).map_err(|e| ApplicationError::ManifestError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut libraries = Vec::with_capacity(manifest.library.len());
        for entry in manifest.library {
            libraries.push(convert(entry)?);
        }

        debug!(count = libraries.len(), "manifest loaded");
        Ok(libraries)
    }

    /// Discover and load every `libraries.toml` under `root`.
    ///
    /// Files are visited in lexical order so results are deterministic.
    #[instrument(skip(self), fields(root = %root.as_ref().display()))]
    pub fn load_dir(&self, root: impl AsRef<Path>) -> WeftResult<Vec<WebLibrary>> {
        let mut libraries = Vec::new();

        for entry in WalkDir::new(root.as_ref())
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if entry.file_type().is_file() && entry.file_name().to_str() == Some(MANIFEST_FILE) {
                libraries.extend(self.load_file(entry.path())?);
            }
        }

        Ok(libraries)
    }
}

/// Turn one manifest entry into a validated domain library.
fn convert(entry: LibraryManifest) -> WeftResult<WebLibrary> {
    let mut builder = WebLibrary::builder(entry.name);
    for dep in entry.requires {
        builder = builder.requires(dep);
    }
    for asset in entry.asset {
        builder = builder.asset(Asset::with_placement(asset.url, asset.kind, asset.placement)?);
    }
    builder.build().map_err(Into::into)
}
