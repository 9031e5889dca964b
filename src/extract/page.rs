//! Parsed catalog page abstraction.

use crate::error::{AuditError, ParseErrorKind, Result};
use scraper::{ElementRef, Html, Selector};

/// An element of a parsed page.
pub trait PageElement: Sized {
    /// Concatenated text of the element and its descendants.
    fn text(&self) -> String;

    /// Value of an attribute.
    fn attr(&self, name: &str) -> Option<String>;

    /// The enclosing element, if any.
    fn parent(&self) -> Option<Self>;

    /// Descendant elements matching a CSS selector.
    fn select(&self, selector: &str) -> Vec<Self>;
}

/// A parsed catalog page.
///
/// The extractor only needs element lookup by tag/attribute selector, lookup
/// by text, attribute and text access, and parent navigation.
pub trait CatalogPage {
    type Element<'a>: PageElement
    where
        Self: 'a;

    /// All elements matching a CSS selector, in document order.
    fn select(&self, selector: &str) -> Vec<Self::Element<'_>>;

    /// First element matching `selector` whose trimmed text equals `text`.
    fn find_by_text(&self, selector: &str, text: &str) -> Option<Self::Element<'_>> {
        self.select(selector)
            .into_iter()
            .find(|e| e.text().trim() == text)
    }

    /// First element matching a CSS selector.
    fn find(&self, selector: &str) -> Option<Self::Element<'_>> {
        self.select(selector).into_iter().next()
    }
}

/// HTML document parsed with `scraper`.
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }
}

/// Compile a CSS selector.
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| {
        AuditError::parse(selector, ParseErrorKind::InvalidSelector(e.to_string()))
    })
}

/// Compiled selector, or `None` with a warning; an invalid selector matches nothing.
fn compiled(selector: &str) -> Option<Selector> {
    match parse_selector(selector) {
        Ok(sel) => Some(sel),
        Err(e) => {
            let reason = std::error::Error::source(&e).map(ToString::to_string);
            tracing::warn!("Ignoring {}: {}", e, reason.unwrap_or_default());
            None
        }
    }
}

impl CatalogPage for HtmlPage {
    type Element<'a> = HtmlElement<'a>;

    fn select(&self, selector: &str) -> Vec<HtmlElement<'_>> {
        compiled(selector).map_or_else(Vec::new, |sel| {
            self.document.select(&sel).map(HtmlElement).collect()
        })
    }
}

/// Element of an [`HtmlPage`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl PageElement for HtmlElement<'_> {
    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent().and_then(ElementRef::wrap).map(HtmlElement)
    }

    fn select(&self, selector: &str) -> Vec<Self> {
        compiled(selector).map_or_else(Vec::new, |sel| {
            self.0.select(&sel).map(HtmlElement).collect()
        })
    }
}
