//! Capability traits the template machinery is written against.
//!
//! A template never knows concrete element, renderer, or asset-manager
//! types; it holds `Arc<dyn ...>` handles to these capabilities and the
//! adapters crate supplies the implementations. All traits are object-safe
//! and `Send + Sync` so handles can be shared across template instances.

use std::sync::Arc;

use crate::domain::entities::web_library::WebLibrary;
use crate::error::WeftResult;

/// Anything that can render itself to HTML markup.
pub trait HtmlElement: Send + Sync {
    /// Append this element's markup to `out`.
    fn render_html(&self, out: &mut String) -> WeftResult<()>;

    /// The element's tag name, when it has a single well-known one.
    ///
    /// Renderers use this for dispatch; container or fragment elements
    /// return `None`.
    fn tag_name(&self) -> Option<&'static str> {
        None
    }
}

/// How well a renderer can handle a given element.
///
/// `Exact` beats `Fallback`: a chain first looks for a renderer with an
/// exact match, then settles for a fallback, then gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSupport {
    /// The renderer was written for exactly this element.
    Exact,
    /// The renderer can produce something sensible for this element.
    Fallback,
    /// The renderer cannot handle this element.
    No,
}

/// A renderer that can take part in a chain.
///
/// Renderers turn elements into markup, usually to override an element's
/// own default rendering (themes, decorators, wrapping markup).
pub trait ChainableRenderer: Send + Sync {
    /// Report whether (and how well) this renderer handles `element`.
    fn can_render(&self, element: &dyn HtmlElement) -> RenderSupport;

    /// Render `element` into `out`.
    ///
    /// Only called after `can_render` returned something other than
    /// [`RenderSupport::No`].
    fn render(&self, element: &dyn HtmlElement, out: &mut String) -> WeftResult<()>;
}

/// A rendering pipeline that accepts a template-level renderer.
///
/// Templates carry an optional renderer with template-specific rules; the
/// concrete template installs it here so those rules take precedence over
/// the pipeline's package renderers. Installation replaces any previously
/// installed template renderer.
pub trait RendererAcceptor: Send + Sync {
    fn install_template_renderer(
        &self,
        renderer: Arc<dyn ChainableRenderer>,
    ) -> WeftResult<()>;
}

/// Registry of web libraries (JS/CSS bundles) for one page.
///
/// Registration is keyed by library name and idempotent; emission methods
/// return ready-to-splice HTML for the two injection points of a page.
pub trait WebLibraryManager: Send + Sync {
    /// Register a library.
    ///
    /// All of the library's dependencies must already be registered.
    /// Registering the same name twice is a no-op.
    fn register(&self, library: WebLibrary) -> WeftResult<()>;

    /// Whether a library with this name is registered.
    fn contains(&self, name: &str) -> bool;

    /// `<link>`/`<script>` tags for the document head, in registration
    /// order, de-duplicated by URL.
    fn head_html(&self) -> WeftResult<String>;

    /// `<script>` tags for deferred scripts, emitted before `</body>`.
    fn body_end_html(&self) -> WeftResult<String>;
}
