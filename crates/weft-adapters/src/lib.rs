//! Infrastructure adapters for Weft.
//!
//! This crate implements the capability traits defined in
//! `weft_core::domain::capabilities` and the `Template` port:
//! concrete HTML elements, the in-memory web library manager, the
//! renderer chain, the base page template, and manifest loading.

pub mod base_template;
pub mod builtin_libraries;
pub mod elements;
pub mod library_loader;
pub mod library_manager;
pub mod renderer;

// Re-export commonly used adapters
pub use base_template::BasePageTemplate;
pub use elements::{Composite, RawHtml, Text};
pub use library_loader::TomlLibraryLoader;
pub use library_manager::InMemoryLibraryManager;
pub use renderer::RendererChain;
