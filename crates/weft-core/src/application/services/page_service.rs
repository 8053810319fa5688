//! Page Service - draws templates into finished pages.
//!
//! The service is the application-side entry point a web layer calls once
//! a template is configured: it runs the template's draw step and returns
//! the final markup.

use tracing::{info, instrument, warn};

use crate::application::ports::Template;
use crate::error::WeftResult;

/// Renders configured templates into complete HTML pages.
#[derive(Debug, Default)]
pub struct PageService;

impl PageService {
    /// Create a new page service.
    pub fn new() -> Self {
        Self
    }

    /// Draw `template` and return the full page markup.
    #[instrument(skip_all)]
    pub fn render_page(&self, template: &dyn Template) -> WeftResult<String> {
        if template.config().title().is_none() {
            warn!("rendering a page without a title");
        }

        let mut out = String::with_capacity(1024);
        template.draw(&mut out)?;

        info!(bytes = out.len(), "page rendered");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::entities::template_config::TemplateConfig;
    use crate::error::WeftError;

    struct FixedPage {
        config: TemplateConfig,
        body: &'static str,
    }

    impl Template for FixedPage {
        fn config(&self) -> &TemplateConfig {
            &self.config
        }
        fn config_mut(&mut self) -> &mut TemplateConfig {
            &mut self.config
        }
        fn draw(&self, out: &mut String) -> WeftResult<()> {
            out.push_str(self.body);
            Ok(())
        }
    }

    struct FailingPage {
        config: TemplateConfig,
    }

    impl Template for FailingPage {
        fn config(&self) -> &TemplateConfig {
            &self.config
        }
        fn config_mut(&mut self) -> &mut TemplateConfig {
            &mut self.config
        }
        fn draw(&self, _out: &mut String) -> WeftResult<()> {
            Err(ApplicationError::RenderingFailed {
                reason: "no renderer for widget".into(),
            }
            .into())
        }
    }

    #[test]
    fn returns_what_the_template_draws() {
        let mut page = FixedPage {
            config: TemplateConfig::new(),
            body: "<html>ok</html>",
        };
        page.set_title("Ok");

        let html = PageService::new().render_page(&page).unwrap();
        assert_eq!(html, "<html>ok</html>");
    }

    #[test]
    fn draw_failures_propagate() {
        let page = FailingPage {
            config: TemplateConfig::new(),
        };
        let err = PageService::new().render_page(&page).unwrap_err();
        assert!(matches!(
            err,
            WeftError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }
}
