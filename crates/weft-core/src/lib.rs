//! Weft Core - template configuration and page assembly.
//!
//! This crate provides the domain and application layers for the Weft
//! HTML templating toolkit, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        Concrete page templates          │
//! │      (implement the Template port)      │
//! └──────────────────┬──────────────────────┘
//!                    │ compose
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            TemplateConfig               │
//! │  (title, content, libraries, renderers) │
//! └──────────────────┬──────────────────────┘
//!                    │ holds handles to
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Capability traits                │
//! │ (HtmlElement, WebLibraryManager,        │
//! │  ChainableRenderer, RendererAcceptor)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     weft-adapters (Infrastructure)      │
//! │ (elements, InMemoryLibraryManager,      │
//! │  RendererChain, BasePageTemplate)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weft_core::prelude::*;
//!
//! // 1. Configure a template (concrete impls live in weft-adapters)
//! # struct MyTemplate { config: TemplateConfig }
//! # impl Template for MyTemplate {
//! #     fn config(&self) -> &TemplateConfig { &self.config }
//! #     fn config_mut(&mut self) -> &mut TemplateConfig { &mut self.config }
//! #     fn draw(&self, out: &mut String) -> WeftResult<()> { Ok(()) }
//! # }
//! let mut template = MyTemplate { config: TemplateConfig::new() };
//! template.set_title("Home");
//!
//! // 2. Render it
//! let service = PageService::new();
//! let html = service.render_page(&template).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LibraryService, PageService,
        ports::Template,
    };
    pub use crate::domain::{
        Asset, AssetKind, AssetUrl, ChainableRenderer, HtmlElement, Placement, RenderSupport,
        RendererAcceptor, TemplateConfig, WebLibrary, WebLibraryBuilder, WebLibraryManager,
    };
    pub use crate::error::{WeftError, WeftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
