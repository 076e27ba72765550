use crate::dom::{DomNode, NodeKind};
use crate::extract::config::ValuePolicy;
use crate::item::{PropertyValue, Uri};

/// Tag name to the attribute that carries its property value
pub const PROPERTY_ATTRIBUTES: &[(&str, &str)] = &[
    ("meta", "content"),
    ("audio", "src"),
    ("embed", "src"),
    ("iframe", "src"),
    ("img", "src"),
    ("source", "src"),
    ("video", "src"),
    ("a", "href"),
    ("area", "href"),
    ("link", "href"),
    ("object", "data"),
    ("time", "datetime"),
];

/// Attributes whose values are URIs rather than text
const URI_ATTRIBUTES: &[&str] = &["href", "src", "data"];

/// Look up the value-carrying attribute for a tag
pub fn property_attribute(tag: &str) -> Option<&'static str> {
    PROPERTY_ATTRIBUTES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, attribute)| *attribute)
}

/// Compute the value an `itemprop` element contributes
pub fn resolve_value<N: DomNode>(element: N, policy: ValuePolicy) -> PropertyValue {
    let Some(attribute) = property_attribute(element.tag_name()) else {
        return PropertyValue::Text(text_content(element));
    };

    let raw = match (element.attribute(attribute), policy) {
        (Some(value), _) => value.to_string(),
        (None, ValuePolicy::Standard) => return PropertyValue::Text(text_content(element)),
        (None, ValuePolicy::AttributeOnly) => String::new(),
    };

    if URI_ATTRIBUTES.contains(&attribute) {
        PropertyValue::Uri(Uri::from(raw))
    } else {
        PropertyValue::Text(raw)
    }
}

/// Concatenate descendant text in document order, skipping `script` subtrees
pub fn text_content<N: DomNode>(node: N) -> String {
    let mut text = String::new();
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        match current.kind() {
            NodeKind::Text { data } => text.push_str(data),
            NodeKind::Element { tag } if tag == "script" => {}
            NodeKind::Element { .. } => {
                // Reverse so the first child is popped first
                let children: Vec<N> = current.children().collect();
                stack.extend(children.into_iter().rev());
            }
            NodeKind::Other => {}
        }
    }

    text
}
