/// Kind of a tree node as seen by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// An element; `tag` is lower-case with any namespace prefix removed
    Element { tag: &'a str },

    /// A text node and its character data
    Text { data: &'a str },

    /// Comments, doctypes, processing instructions and anything else
    Other,
}

/// Minimal view over a node of an already-parsed document tree.
///
/// Implementors are cheap handles (references or small copyable wrappers)
/// into a tree that outlives the extraction. Only `kind`, `attribute` and
/// `children` need to be written; the remaining capabilities derive from them.
pub trait DomNode: Copy {
    /// Iterator over this node's children in document order
    type Children: Iterator<Item = Self>;

    /// The tagged kind of this node
    fn kind(&self) -> NodeKind<'_>;

    /// Attribute value by name, `None` when absent or when the node is not an element
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Children of this node in document order
    fn children(&self) -> Self::Children;

    fn is_element(&self) -> bool {
        matches!(self.kind(), NodeKind::Element { .. })
    }

    fn is_text(&self) -> bool {
        matches!(self.kind(), NodeKind::Text { .. })
    }

    /// Tag name of an element, empty for every other kind of node
    fn tag_name(&self) -> &str {
        match self.kind() {
            NodeKind::Element { tag } => tag,
            _ => "",
        }
    }

    /// Character data of a text node, empty for every other kind of node
    fn text_data(&self) -> &str {
        match self.kind() {
            NodeKind::Text { data } => data,
            _ => "",
        }
    }

    /// Check for an attribute regardless of its value
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Normalize a raw tag name: strip a namespace prefix and lower-case it
pub fn normalize_tag(raw: &str) -> String {
    let local = match raw.rsplit_once(['}', ':']) {
        Some((_, local)) => local,
        None => raw,
    };
    local.to_ascii_lowercase()
}
