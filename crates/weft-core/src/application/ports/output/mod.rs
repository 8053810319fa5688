//! The template port.
//!
//! [`Template`] is the contract a concrete page template implements. It
//! replaces the classic abstract-base-class design with composition: the
//! implementor owns a [`TemplateConfig`] and exposes it through
//! `config()`/`config_mut()`; the provided methods delegate the common
//! accessors so call sites read the same either way.

use std::sync::Arc;

use crate::domain::capabilities::{ChainableRenderer, HtmlElement, WebLibraryManager};
use crate::domain::entities::template_config::TemplateConfig;
use crate::error::WeftResult;

/// A page-layout strategy that arranges a title, main content, and asset
/// references into final markup.
///
/// Implemented by:
/// - `weft_adapters::BasePageTemplate` (general-purpose page skeleton)
/// - application-specific templates composing their own `TemplateConfig`
pub trait Template: Send + Sync {
    /// The template's configuration.
    fn config(&self) -> &TemplateConfig;

    /// Mutable access to the template's configuration.
    fn config_mut(&mut self) -> &mut TemplateConfig;

    /// Render the full page into `out`.
    ///
    /// This is the one method without a sensible default; everything a
    /// template displays comes out of its config here.
    fn draw(&self, out: &mut String) -> WeftResult<()>;

    // ------------------------------------------------------------------
    // Provided accessors, delegating to the config holder.
    // ------------------------------------------------------------------

    /// Set the page title.
    fn set_title(&mut self, title: &str) {
        self.config_mut().set_title(title);
    }

    /// The page title, if one was set.
    fn title(&self) -> Option<&str> {
        self.config().title()
    }

    /// Replace the main content element.
    fn set_content(&mut self, content: Arc<dyn HtmlElement>) {
        self.config_mut().set_content(content);
    }

    /// Set the web library manager for this template.
    fn set_web_library_manager(&mut self, manager: Arc<dyn WebLibraryManager>) {
        self.config_mut().set_web_library_manager(manager);
    }

    /// The manager used to add JS/CSS files to this page.
    fn web_library_manager(&self) -> Option<&Arc<dyn WebLibraryManager>> {
        self.config().web_library_manager()
    }

    /// Set the renderer that overrides default rendering of sub-items.
    fn set_template_renderer(&mut self, renderer: Arc<dyn ChainableRenderer>) {
        self.config_mut().set_template_renderer(renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Minimal {
        config: TemplateConfig,
    }

    impl Template for Minimal {
        fn config(&self) -> &TemplateConfig {
            &self.config
        }
        fn config_mut(&mut self) -> &mut TemplateConfig {
            &mut self.config
        }
        fn draw(&self, out: &mut String) -> WeftResult<()> {
            out.push_str(self.title().unwrap_or("untitled"));
            Ok(())
        }
    }

    #[test]
    fn provided_accessors_delegate_to_config() {
        let mut template = Minimal {
            config: TemplateConfig::new(),
        };
        assert!(template.title().is_none());

        template.set_title("About");
        assert_eq!(template.title(), Some("About"));
        assert_eq!(template.config().title(), Some("About"));
    }

    #[test]
    fn template_is_object_safe() {
        let mut template = Minimal {
            config: TemplateConfig::new(),
        };
        template.set_title("Dyn");

        let dyn_template: &dyn Template = &template;
        let mut out = String::new();
        dyn_template.draw(&mut out).unwrap();
        assert_eq!(out, "Dyn");
    }
}
