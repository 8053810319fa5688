//! Chained renderer pipeline.
//!
//! [`RendererChain`] is both a [`ChainableRenderer`] (it renders by
//! delegating to its members) and a [`RendererAcceptor`] (templates
//! install their renderer into it). Dispatch order:
//!
//! 1. the installed template renderer, if any
//! 2. package renderers, in push order
//!
//! Within that order, a renderer reporting [`RenderSupport::Exact`] wins
//! over every [`RenderSupport::Fallback`]. If nothing in the chain can
//! handle the element, rendering fails; callers that want the element's
//! own markup as a fallback check `can_render` first.

use std::sync::{Arc, RwLock};

use tracing::{debug, instrument};

use weft_core::{
    application::ApplicationError,
    domain::{ChainableRenderer, HtmlElement, RenderSupport, RendererAcceptor},
    error::WeftResult,
};

#[derive(Default)]
struct ChainInner {
    /// Replaceable slot; installing again swaps the previous one out.
    template_renderer: Option<Arc<dyn ChainableRenderer>>,
    /// Package renderers, consulted after the template renderer.
    renderers: Vec<Arc<dyn ChainableRenderer>>,
}

impl ChainInner {
    fn members(&self) -> impl Iterator<Item = &Arc<dyn ChainableRenderer>> {
        self.template_renderer.iter().chain(self.renderers.iter())
    }

    /// First Exact member, else first Fallback member.
    fn select(&self, element: &dyn HtmlElement) -> Option<Arc<dyn ChainableRenderer>> {
        let mut fallback = None;
        for renderer in self.members() {
            match renderer.can_render(element) {
                RenderSupport::Exact => return Some(Arc::clone(renderer)),
                RenderSupport::Fallback if fallback.is_none() => {
                    fallback = Some(Arc::clone(renderer));
                }
                _ => {}
            }
        }
        fallback
    }
}

/// Thread-safe renderer chain.
#[derive(Clone, Default)]
pub struct RendererChain {
    inner: Arc<RwLock<ChainInner>>,
}

impl RendererChain {
    /// Create a new empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a package renderer to the end of the chain.
    pub fn push(&self, renderer: Arc<dyn ChainableRenderer>) -> WeftResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ManagerLockError)?;
        inner.renderers.push(renderer);
        Ok(())
    }
}

impl RendererAcceptor for RendererChain {
    fn install_template_renderer(
        &self,
        renderer: Arc<dyn ChainableRenderer>,
    ) -> WeftResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ManagerLockError)?;
        if inner.template_renderer.is_some() {
            debug!("replacing previously installed template renderer");
        }
        inner.template_renderer = Some(renderer);
        Ok(())
    }
}

impl ChainableRenderer for RendererChain {
    fn can_render(&self, element: &dyn HtmlElement) -> RenderSupport {
        let Ok(inner) = self.inner.read() else {
            return RenderSupport::No;
        };
        let mut best = RenderSupport::No;
        for renderer in inner.members() {
            match renderer.can_render(element) {
                RenderSupport::Exact => return RenderSupport::Exact,
                RenderSupport::Fallback => best = RenderSupport::Fallback,
                RenderSupport::No => {}
            }
        }
        best
    }

    #[instrument(skip_all)]
    fn render(&self, element: &dyn HtmlElement, out: &mut String) -> WeftResult<()> {
        let selected = {
            let inner = self
                .inner
                .read()
                .map_err(|_| ApplicationError::ManagerLockError)?;
            inner.select(element)
        };

        match selected {
            Some(renderer) => renderer.render(element, out),
            None => Err(ApplicationError::RenderingFailed {
                reason: format!(
                    "no renderer in the chain can handle element <{}>",
                    element.tag_name().unwrap_or("unknown")
                ),
            }
            .into()),
        }
    }
}
