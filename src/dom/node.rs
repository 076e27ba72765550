use crate::dom::adapter::{DomNode, NodeKind, normalize_tag};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node of an owned document tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element(ElementNode),
    Text { data: String },
    Comment { data: String },
}

/// Represents a DOM element node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementNode {
    /// HTML tag name (e.g., "div", "span", "meta")
    pub tag_name: String,

    /// Element attributes in source order
    #[serde(default)]
    pub attributes: IndexMap<String, String>,

    /// Child nodes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a text node
    pub fn text(data: impl Into<String>) -> Self {
        Node::Text { data: data.into() }
    }

    /// Create a comment node
    pub fn comment(data: impl Into<String>) -> Self {
        Node::Comment { data: data.into() }
    }

    /// Borrow the element if this node is one
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Count element nodes in this subtree, including this one
    pub fn count_elements(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Node::Element(element) = node {
                count += 1;
                stack.extend(element.children.iter());
            }
        }
        count
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}

impl ElementNode {
    /// Create a new ElementNode; the tag name is normalized to lower case
    pub fn new(tag_name: impl AsRef<str>) -> Self {
        Self {
            tag_name: normalize_tag(tag_name.as_ref()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder method: set a single attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Builder method: set attributes
    pub fn with_attributes(mut self, attributes: IndexMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder method: append a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::text(text));
        self
    }

    /// Builder method: append a child node
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add_child(child);
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Add a child node
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }
}

impl<'a> DomNode for &'a Node {
    type Children = std::slice::Iter<'a, Node>;

    fn kind(&self) -> NodeKind<'_> {
        match self {
            Node::Element(element) => NodeKind::Element {
                tag: &element.tag_name,
            },
            Node::Text { data } => NodeKind::Text { data },
            Node::Comment { .. } => NodeKind::Other,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.as_element().and_then(|element| element.get_attribute(name))
    }

    fn children(&self) -> Self::Children {
        match *self {
            Node::Element(element) => element.children.iter(),
            _ => <&[Node]>::default().iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node_creation() {
        let element = ElementNode::new("SPAN")
            .with_attribute("itemprop", "name")
            .with_text("Jane Doe");

        assert_eq!(element.tag_name, "span");
        assert_eq!(element.get_attribute("itemprop"), Some("name"));
        assert!(element.has_attribute("itemprop"));
        assert!(!element.has_attribute("itemscope"));
        assert!(element.is_tag("Span"));
        assert_eq!(element.children, vec![Node::text("Jane Doe")]);
    }

    #[test]
    fn test_adapter_view() {
        let node = Node::from(
            ElementNode::new("div")
                .with_attribute("itemscope", "")
                .with_text("hello")
                .with_child(Node::comment("ignored")),
        );
        let view = &node;

        assert!(view.is_element());
        assert_eq!(view.tag_name(), "div");
        assert_eq!(view.attribute("itemscope"), Some(""));
        assert!(view.has_attribute("itemscope"));

        let children: Vec<_> = view.children().collect();
        assert_eq!(children.len(), 2);
        assert!(children[0].is_text());
        assert_eq!(children[0].text_data(), "hello");
        assert_eq!(children[1].kind(), NodeKind::Other);
        assert_eq!(children[0].attribute("itemscope"), None);
        assert_eq!(children[0].children().count(), 0);
    }

    #[test]
    fn test_count_elements() {
        let node = Node::from(
            ElementNode::new("body")
                .with_child(ElementNode::new("p").with_text("a"))
                .with_child(ElementNode::new("div").with_child(ElementNode::new("span"))),
        );
        assert_eq!(node.count_elements(), 4);
    }

    #[test]
    fn test_serialization() {
        let node = Node::from(
            ElementNode::new("a")
                .with_attribute("href", "/x")
                .with_text("link"),
        );

        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"element\""));
        let deserialized: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node, deserialized);
    }
}
