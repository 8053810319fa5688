//! Value objects for the asset model.
//!
//! Small enums with stable string forms. The string forms are part of the
//! `libraries.toml` manifest format, so `FromStr`/serde stay in sync with
//! the documented manifest keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// What kind of asset a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A JavaScript file, emitted as a `<script>` tag.
    Script,
    /// A CSS file, emitted as a `<link rel="stylesheet">` tag.
    Stylesheet,
}

impl AssetKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Stylesheet => "stylesheet",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "script" | "js" => Ok(Self::Script),
            "stylesheet" | "css" => Ok(Self::Stylesheet),
            other => Err(DomainError::InvalidLibrary(format!(
                "unknown asset kind '{}' (expected 'script' or 'stylesheet')",
                other
            ))),
        }
    }
}

/// Where in the page an asset's tag is emitted.
///
/// Stylesheets always belong in the head; scripts may be deferred to the
/// end of the body so they do not block first paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    Head,
    BodyEnd,
}

impl Placement {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::BodyEnd => "body-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "head" => Ok(Self::Head),
            "body-end" | "bodyend" | "footer" => Ok(Self::BodyEnd),
            other => Err(DomainError::InvalidLibrary(format!(
                "unknown placement '{}' (expected 'head' or 'body-end')",
                other
            ))),
        }
    }
}
