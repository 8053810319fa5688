use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::value_objects::{AssetKind, Placement};

/// A JS/CSS asset URL guaranteed to be usable inside an HTML attribute.
///
/// Invariant: never empty, never contains whitespace or control characters.
/// Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetUrl(String);

impl AssetUrl {
    /// Fallible constructor.
    pub fn try_new(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        if url.is_empty() {
            return Err(DomainError::InvalidAssetUrl {
                url,
                reason: "URL is empty".into(),
            });
        }
        if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::InvalidAssetUrl {
                url,
                reason: "URL contains whitespace or control characters".into(),
            });
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AssetUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One JS or CSS file belonging to a web library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    url: AssetUrl,
    kind: AssetKind,
    placement: Placement,
}

impl Asset {
    /// A script emitted in the document head.
    pub fn script(url: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            url: AssetUrl::try_new(url)?,
            kind: AssetKind::Script,
            placement: Placement::Head,
        })
    }

    /// A script deferred to the end of the body.
    pub fn deferred_script(url: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            url: AssetUrl::try_new(url)?,
            kind: AssetKind::Script,
            placement: Placement::BodyEnd,
        })
    }

    /// A stylesheet; always emitted in the document head.
    pub fn stylesheet(url: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            url: AssetUrl::try_new(url)?,
            kind: AssetKind::Stylesheet,
            placement: Placement::Head,
        })
    }

    /// Explicit constructor; stylesheets ignore `BodyEnd` and stay in the head.
    pub fn with_placement(
        url: impl Into<String>,
        kind: AssetKind,
        placement: Placement,
    ) -> Result<Self, DomainError> {
        let placement = match kind {
            AssetKind::Stylesheet => Placement::Head,
            AssetKind::Script => placement,
        };
        Ok(Self {
            url: AssetUrl::try_new(url)?,
            kind,
            placement,
        })
    }

    pub fn url(&self) -> &AssetUrl {
        &self.url
    }

    pub const fn kind(&self) -> AssetKind {
        self.kind
    }

    pub const fn placement(&self) -> Placement {
        self.placement
    }
}
