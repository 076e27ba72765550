use crate::dom::node::{ElementNode, Node};
use crate::error::{MicrodataError, Result};
use crate::extract::{ExtractOptions, Extractor};
use crate::item::Item;
use serde::Deserialize;

/// An owned document tree
#[derive(Debug, Clone, PartialEq)]
pub struct DomTree {
    /// Root node of the tree
    pub root: Node,
}

impl DomTree {
    /// Create a new DomTree
    pub fn new(root: impl Into<Node>) -> Self {
        Self { root: root.into() }
    }

    /// Build a tree from its JSON form (see [`Node`] for the layout).
    ///
    /// Nesting depth is unbounded; the stack grows on demand while parsing.
    pub fn from_json(json: &str) -> Result<Self> {
        let parse_failed =
            |e: serde_json::Error| MicrodataError::TreeParseFailed(format!("Failed to parse tree JSON: {}", e));

        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let root = Node::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
            .map_err(parse_failed)?;
        deserializer.end().map_err(parse_failed)?;
        Ok(Self::new(root))
    }

    /// Convert the tree to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Root element, if the root node is one
    pub fn root_element(&self) -> Option<&ElementNode> {
        self.root.as_element()
    }

    /// Count total elements in the tree
    pub fn count_elements(&self) -> usize {
        self.root.count_elements()
    }

    /// Extract the microdata items of this tree
    pub fn items(&self, options: &ExtractOptions) -> Result<Vec<Item>> {
        Extractor::new(options.clone()).extract(&self.root)
    }
}
