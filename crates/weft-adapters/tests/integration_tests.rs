//! Integration tests for weft-adapters.
//!
//! Full page-assembly workflow: built-in libraries, the in-memory
//! manager, the renderer chain, and the base page template, driven
//! through the core services.

use std::sync::{Arc, Once};

use weft_adapters::{
    BasePageTemplate, Composite, InMemoryLibraryManager, RawHtml, RendererChain, Text,
    builtin_libraries,
};
use weft_core::prelude::*;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn full_page_assembly() {
    init_tracing();

    // Libraries
    let manager: Arc<dyn WebLibraryManager> = Arc::new(InMemoryLibraryManager::new());
    let libraries = LibraryService::new(Arc::clone(&manager));
    libraries
        .register_all(builtin_libraries::all_libraries().unwrap())
        .unwrap();
    assert!(libraries.contains("bootstrap"));

    // Content
    let mut body = Composite::new();
    body.push(Arc::new(RawHtml::new("<h1>Welcome</h1>")));
    body.push(Arc::new(Text::new("Terms & conditions apply")));

    // Template
    let mut template = BasePageTemplate::new();
    template.set_title("Home");
    template.set_web_library_manager(manager);
    template.set_content(Arc::new(body));

    let html = PageService::new().render_page(&template).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Home</title>"));
    assert!(html.contains("jquery-3.7.1.min.js"));
    assert!(html.contains("bootstrap.min.css"));
    assert!(html.contains("<h1>Welcome</h1>"));
    assert!(html.contains("Terms &amp; conditions apply"));

    // Deferred bootstrap JS lands after the content, before </body>.
    let content_pos = html.find("<h1>Welcome</h1>").unwrap();
    let deferred_pos = html.find("bootstrap.bundle.min.js").unwrap();
    let body_end = html.find("</body>").unwrap();
    assert!(content_pos < deferred_pos && deferred_pos < body_end);
}

#[test]
fn template_renderer_reaches_the_default_pipeline() {
    init_tracing();

    struct CardRenderer;
    impl ChainableRenderer for CardRenderer {
        fn can_render(&self, _element: &dyn HtmlElement) -> RenderSupport {
            RenderSupport::Fallback
        }
        fn render(&self, element: &dyn HtmlElement, out: &mut String) -> WeftResult<()> {
            out.push_str("<div class=\"card\">");
            element.render_html(out)?;
            out.push_str("</div>");
            Ok(())
        }
    }

    let chain = Arc::new(RendererChain::new());

    let mut template = BasePageTemplate::new();
    template.set_content(Arc::new(RawHtml::new("inner")));
    template.set_template_renderer(Arc::new(CardRenderer));
    template
        .config_mut()
        .set_default_renderer(Arc::clone(&chain) as Arc<dyn RendererAcceptor>);

    let html = PageService::new().render_page(&template).unwrap();
    assert!(html.contains("<div class=\"card\">inner</div>"));

    // The default pipeline can now render arbitrary elements through the
    // installed template renderer.
    let mut out = String::new();
    chain.render(&RawHtml::new("standalone"), &mut out).unwrap();
    assert_eq!(out, "<div class=\"card\">standalone</div>");
}

#[test]
fn manager_is_shared_between_service_and_template() {
    init_tracing();

    let manager = Arc::new(InMemoryLibraryManager::new());
    let libraries = LibraryService::new(manager.clone() as Arc<dyn WebLibraryManager>);

    let mut template = BasePageTemplate::new();
    template.set_web_library_manager(libraries.manager());

    // Registering after configuration is visible at draw time: the
    // template holds a shared handle, not a snapshot.
    libraries
        .register(
            WebLibrary::builder("late")
                .stylesheet("css/late.css")
                .build()
                .unwrap(),
        )
        .unwrap();

    let html = PageService::new().render_page(&template).unwrap();
    assert!(html.contains("css/late.css"));
}
