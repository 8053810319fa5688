//! General-purpose page template.
//!
//! [`BasePageTemplate`] is the standard [`Template`] implementation: it
//! composes a [`TemplateConfig`] and draws a complete HTML document from
//! it. Anything fancier (multi-column layouts, themed chrome) implements
//! `Template` itself, usually wrapping one of these.

use std::sync::Arc;

use tracing::instrument;

use weft_core::{
    application::ports::Template,
    domain::{RenderSupport, TemplateConfig},
    error::WeftResult,
};

use crate::elements::escape;

/// A page template drawing the classic head/body document skeleton.
///
/// Draw order: doctype, head (charset, title, library head assets), body
/// (main content, library body-end assets). The main content goes through
/// the template renderer when one is set and claims support; otherwise
/// the element renders itself.
#[derive(Default)]
pub struct BasePageTemplate {
    config: TemplateConfig,
}

impl BasePageTemplate {
    /// Create a template with an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Template for BasePageTemplate {
    fn config(&self) -> &TemplateConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut TemplateConfig {
        &mut self.config
    }

    #[instrument(skip_all, fields(title = self.config.title().unwrap_or("")))]
    fn draw(&self, out: &mut String) -> WeftResult<()> {
        // Template-renderer wiring happens here, not in the config holder:
        // custom rules must reach the default pipeline before any sub-item
        // renders. Installation replaces, so redrawing is safe.
        if let (Some(renderer), Some(acceptor)) = (
            self.config.template_renderer(),
            self.config.default_renderer(),
        ) {
            acceptor.install_template_renderer(Arc::clone(renderer))?;
        }

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");

        if let Some(title) = self.config.title() {
            out.push_str("<title>");
            out.push_str(&escape(title));
            out.push_str("</title>\n");
        }

        if let Some(manager) = self.config.web_library_manager() {
            out.push_str(&manager.head_html()?);
        }

        out.push_str("</head>\n<body>\n");

        if let Some(content) = self.config.content() {
            match self.config.template_renderer() {
                Some(renderer)
                    if renderer.can_render(content.as_ref()) != RenderSupport::No =>
                {
                    renderer.render(content.as_ref(), out)?;
                }
                _ => content.render_html(out)?,
            }
            out.push('\n');
        }

        if let Some(manager) = self.config.web_library_manager() {
            out.push_str(&manager.body_end_html()?);
        }

        out.push_str("</body>\n</html>\n");
        Ok(())
    }
}
