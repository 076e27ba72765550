use crate::dom::DomNode;
use crate::error::{MicrodataError, Result};
use crate::extract::config::{ExtractOptions, ItempropTokens};
use crate::extract::resolver::resolve_value;
use crate::item::{Item, PropertyValue};
use std::sync::Arc;

/// An itemscope element that no itemprop links to, with its depth from the root
type Unlinked<N> = Vec<(N, usize)>;

/// Walks a document tree and builds microdata items
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract every top-level item under `root`.
    ///
    /// Items linked from an ancestor scope appear nested inside it; itemscope
    /// elements no itemprop refers to are returned as separate top-level items,
    /// in document order of discovery.
    pub fn extract<N: DomNode>(&self, root: N) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        self.find_items(root, 0, &mut items).inspect_err(|e| {
            log::warn!("Microdata extraction aborted: {}", e);
        })?;
        log::debug!("Extracted {} top-level items", items.len());
        Ok(items)
    }

    fn find_items<N: DomNode>(&self, node: N, depth: usize, items: &mut Vec<Item>) -> Result<()> {
        self.check_depth(depth)?;

        if node.is_element() && is_itemscope(node) {
            let mut item = make_item(node);
            let mut unlinked = Vec::new();
            self.populate(node, &mut item, depth, &mut unlinked)?;
            items.push(item);

            for (element, element_depth) in unlinked {
                log::trace!("Promoting unlinked <{}> scope to top level", element.tag_name());
                self.find_items(element, element_depth, items)?;
            }
        } else {
            for child in node.children() {
                self.find_items(child, depth + 1, items)?;
            }
        }

        Ok(())
    }

    /// Fill `item` from the descendants of `node`, collecting unlinked scopes
    fn populate<N: DomNode>(
        &self,
        node: N,
        item: &mut Item,
        depth: usize,
        unlinked: &mut Unlinked<N>,
    ) -> Result<()> {
        for child in node.children() {
            if !child.is_element() {
                continue;
            }
            let child_depth = depth + 1;
            self.check_depth(child_depth)?;

            let names = itemprop_names(child, self.options.itemprop_tokens);
            let has_scope = is_itemscope(child);

            match (names.is_empty(), has_scope) {
                (false, true) => {
                    let mut nested = make_item(child);
                    self.populate(child, &mut nested, child_depth, unlinked)?;
                    let nested = Arc::new(nested);
                    for name in names {
                        item.set(name, PropertyValue::Item(Arc::clone(&nested)));
                    }
                }
                (false, false) => {
                    let value = resolve_value(child, self.options.value_policy);
                    for name in names {
                        item.set(name, value.clone());
                    }
                    self.populate(child, item, child_depth, unlinked)?;
                }
                (true, true) => unlinked.push((child, child_depth)),
                (true, false) => self.populate(child, item, child_depth, unlinked)?,
            }
        }

        Ok(())
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(MicrodataError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }
}

fn is_itemscope<N: DomNode>(node: N) -> bool {
    node.has_attribute("itemscope")
}

/// `itemprop` tokens in attribute order
fn itemprop_names<N: DomNode>(node: N, tokens: ItempropTokens) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    if let Some(value) = node.attribute("itemprop") {
        for token in value.split_ascii_whitespace() {
            if tokens == ItempropTokens::Unique && names.iter().any(|name| name == token) {
                continue;
            }
            names.push(token.to_string());
        }
    }
    names
}

fn make_item<N: DomNode>(node: N) -> Item {
    assert!(
        is_itemscope(node),
        "<{}> has no itemscope attribute and cannot start an item",
        node.tag_name()
    );
    log::debug!("Opening item scope on <{}>", node.tag_name());
    Item::from_attributes(node.attribute("itemtype"), node.attribute("itemid"))
}
