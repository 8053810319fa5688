//! Baseline [`HtmlElement`] implementations.
//!
//! Three building blocks cover most content wiring:
//! - [`RawHtml`] for markup that is already trusted HTML
//! - [`Text`] for user-supplied text, escaped on render
//! - [`Composite`] for an ordered sequence of child elements

use std::sync::Arc;

use weft_core::domain::HtmlElement;
use weft_core::error::WeftResult;

/// Escape a string for safe inclusion in HTML text or attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trusted markup, emitted verbatim.
///
/// The caller vouches for the content; nothing is escaped.
#[derive(Debug, Clone)]
pub struct RawHtml {
    markup: String,
}

impl RawHtml {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

impl HtmlElement for RawHtml {
    fn render_html(&self, out: &mut String) -> WeftResult<()> {
        out.push_str(&self.markup);
        Ok(())
    }
}

/// Plain text, HTML-escaped on render.
#[derive(Debug, Clone)]
pub struct Text {
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl HtmlElement for Text {
    fn render_html(&self, out: &mut String) -> WeftResult<()> {
        out.push_str(&escape(&self.text));
        Ok(())
    }
}

/// An ordered sequence of child elements, rendered back to back.
///
/// This is the home of the "multiple content elements" shape: a template's
/// content slot holds exactly one element, so pages with several blocks
/// wrap them in a `Composite`.
#[derive(Default, Clone)]
pub struct Composite {
    children: Vec<Arc<dyn HtmlElement>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child element.
    pub fn push(&mut self, child: Arc<dyn HtmlElement>) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl HtmlElement for Composite {
    fn render_html(&self, out: &mut String) -> WeftResult<()> {
        for child in &self.children {
            child.render_html(out)?;
        }
        Ok(())
    }
}
