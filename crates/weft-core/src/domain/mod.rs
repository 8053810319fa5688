//! Core domain layer for Weft.
//!
//! Pure template-configuration and asset-model logic. All I/O and concrete
//! rendering live behind the capability traits in [`capabilities`] and are
//! supplied by the `weft-adapters` crate.
//!
//! Layer rules, same as the rest of the core:
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **No external crates**: std + thiserror (+ serde derives on the
//!   manifest-facing value objects)

pub mod capabilities;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use capabilities::{
    ChainableRenderer, HtmlElement, RenderSupport, RendererAcceptor, WebLibraryManager,
};
pub use entities::{
    common::{Asset, AssetUrl},
    template_config::TemplateConfig,
    web_library::{WebLibrary, WebLibraryBuilder},
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{AssetKind, Placement};

pub use validation::DomainValidator;
