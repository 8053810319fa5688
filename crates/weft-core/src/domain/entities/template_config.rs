//! Template configuration holder.
//!
//! [`TemplateConfig`] stores everything a page template is configured with
//! before it draws: the page title, the main content element, the web
//! library manager and the renderer handles. Concrete templates compose
//! one of these instead of inheriting from a base class; the
//! [`Template`](crate::application::ports::Template) trait exposes it.
//!
//! Every field is absent until explicitly set, every setter overwrites
//! (last write wins), and nothing is ever cleared implicitly.

use std::fmt;
use std::sync::Arc;

use crate::domain::capabilities::{
    ChainableRenderer, HtmlElement, RendererAcceptor, WebLibraryManager,
};

/// Mutable configuration of a page template.
#[derive(Default)]
pub struct TemplateConfig {
    /// The element displayed as the main content of the page.
    /// Absent until assigned; assignment replaces wholesale.
    content: Option<Arc<dyn HtmlElement>>,

    /// The title of the HTML page.
    title: Option<String>,

    /// Tracks the JS/CSS libraries this page pulls in. Shared with
    /// whatever else registers libraries for the same page.
    web_library_manager: Option<Arc<dyn WebLibraryManager>>,

    /// Renderer with template-specific rules, used to override the
    /// default rendering of sub-items.
    template_renderer: Option<Arc<dyn ChainableRenderer>>,

    /// The default rendering pipeline. The concrete template is expected
    /// to install `template_renderer` into it before drawing; the holder
    /// itself never does that wiring.
    default_renderer: Option<Arc<dyn RendererAcceptor>>,
}

impl TemplateConfig {
    /// A configuration with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the main content with a single element.
    pub fn set_content(&mut self, content: Arc<dyn HtmlElement>) {
        self.content = Some(content);
    }

    pub fn content(&self) -> Option<&Arc<dyn HtmlElement>> {
        self.content.as_ref()
    }

    /// Set the title of the HTML page.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the web library manager used to add JS/CSS files to this page.
    pub fn set_web_library_manager(
        &mut self,
        manager: Arc<dyn WebLibraryManager>,
    ) -> &mut Self {
        self.web_library_manager = Some(manager);
        self
    }

    pub fn web_library_manager(&self) -> Option<&Arc<dyn WebLibraryManager>> {
        self.web_library_manager.as_ref()
    }

    /// Set the renderer used to override default rendering of sub-items.
    pub fn set_template_renderer(
        &mut self,
        renderer: Arc<dyn ChainableRenderer>,
    ) -> &mut Self {
        self.template_renderer = Some(renderer);
        self
    }

    pub fn template_renderer(&self) -> Option<&Arc<dyn ChainableRenderer>> {
        self.template_renderer.as_ref()
    }

    /// Set the default rendering pipeline.
    pub fn set_default_renderer(
        &mut self,
        acceptor: Arc<dyn RendererAcceptor>,
    ) -> &mut Self {
        self.default_renderer = Some(acceptor);
        self
    }

    pub fn default_renderer(&self) -> Option<&Arc<dyn RendererAcceptor>> {
        self.default_renderer.as_ref()
    }
}

impl fmt::Debug for TemplateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateConfig")
            .field("title", &self.title)
            .field("content", &self.content.as_ref().map(|_| "<element>"))
            .field(
                "web_library_manager",
                &self.web_library_manager.as_ref().map(|_| "<manager>"),
            )
            .field(
                "template_renderer",
                &self.template_renderer.as_ref().map(|_| "<renderer>"),
            )
            .field(
                "default_renderer",
                &self.default_renderer.as_ref().map(|_| "<acceptor>"),
            )
            .finish()
    }
}
