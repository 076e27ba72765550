//! HTML documents via `scraper`
//!
//! Parsing is delegated to `scraper` (html5ever); this module only exposes the
//! parsed tree through [`DomNode`] so the extractor can walk it.

use crate::dom::{DomNode, NodeKind};
use crate::error::Result;
use crate::extract::{ExtractOptions, Extractor};
use crate::item::Item;
use scraper::{ElementRef, Html};

/// A node of a parsed `scraper` document
#[derive(Debug, Clone, Copy)]
pub enum HtmlNode<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
    Other,
}

impl<'a> HtmlNode<'a> {
    /// The document's root element
    pub fn root(document: &'a Html) -> Self {
        HtmlNode::Element(document.root_element())
    }
}

impl<'a> DomNode for HtmlNode<'a> {
    type Children = std::vec::IntoIter<HtmlNode<'a>>;

    fn kind(&self) -> NodeKind<'_> {
        match self {
            HtmlNode::Element(element) => NodeKind::Element {
                tag: element.value().name(),
            },
            HtmlNode::Text(data) => NodeKind::Text { data },
            HtmlNode::Other => NodeKind::Other,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            HtmlNode::Element(element) => element.value().attr(name),
            _ => None,
        }
    }

    fn children(&self) -> Self::Children {
        let HtmlNode::Element(element) = self else {
            return Vec::new().into_iter();
        };

        element
            .children()
            .map(|child| match child.value() {
                scraper::Node::Element(_) => ElementRef::wrap(child)
                    .map(HtmlNode::Element)
                    .unwrap_or(HtmlNode::Other),
                scraper::Node::Text(text) => HtmlNode::Text(&text.text),
                _ => HtmlNode::Other,
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Parse an HTML document
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Extract the items of an already-parsed document
pub fn items_from_document(document: &Html, options: &ExtractOptions) -> Result<Vec<Item>> {
    Extractor::new(options.clone()).extract(HtmlNode::root(document))
}

/// Parse `html` and extract its items
pub fn items_from_html(html: &str, options: &ExtractOptions) -> Result<Vec<Item>> {
    let document = parse_document(html);
    items_from_document(&document, options)
}
