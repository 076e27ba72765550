//! Microdata extraction
//!
//! - Extractor: the scope walk that links itemprops to their enclosing items
//! - resolver: per-tag property value resolution and text extraction
//! - ExtractOptions: depth bound, value policy and itemprop token handling

pub mod config;
pub mod resolver;
pub mod scope;

pub use config::{DEFAULT_MAX_DEPTH, ExtractOptions, ItempropTokens, ValuePolicy};
pub use resolver::{resolve_value, text_content};
pub use scope::Extractor;

use crate::dom::DomNode;
use crate::error::Result;
use crate::item::Item;

/// Extract all items under `root` with default options
pub fn get_items<N: DomNode>(root: N) -> Result<Vec<Item>> {
    Extractor::default().extract(root)
}

/// Extract all items under `root` with the given options
pub fn get_items_with<N: DomNode>(root: N, options: &ExtractOptions) -> Result<Vec<Item>> {
    Extractor::new(options.clone()).extract(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementNode, Node};

    #[test]
    fn test_get_items_export() {
        let root = Node::from(
            ElementNode::new("div")
                .with_attribute("itemscope", "")
                .with_child(ElementNode::new("meta").with_attribute("itemprop", "rating").with_attribute("content", "5")),
        );
        let items = get_items(&root).unwrap();
        assert_eq!(items[0].get("rating").and_then(|v| v.as_text()), Some("5"));
    }

    #[test]
    fn test_get_items_with_policy() {
        let root = Node::from(
            ElementNode::new("div")
                .with_attribute("itemscope", "")
                .with_child(ElementNode::new("a").with_attribute("itemprop", "url").with_text("home")),
        );
        let options = ExtractOptions::new().value_policy(ValuePolicy::AttributeOnly);
        let items = get_items_with(&root, &options).unwrap();
        assert_eq!(items[0].get("url").and_then(|v| v.as_str()), Some(""));

        let items = get_items(&root).unwrap();
        assert_eq!(items[0].get("url").and_then(|v| v.as_text()), Some("home"));
    }
}
