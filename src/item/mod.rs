//! Microdata item model
//!
//! This module provides the data structures produced by extraction:
//! - Item: a typed, identified bag of ordered, multi-valued properties
//! - PropertyValue: nested item, URI or plain text
//! - Uri: opaque string reference
//! - ItemDocument: the `{"items": [...]}` envelope used for output

pub mod serialize;
pub mod uri;

pub use serialize::{ItemDocument, serialize};
pub use uri::Uri;

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// The value assigned to a property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A nested item; shared when one element feeds several property names
    Item(Arc<Item>),
    Uri(Uri),
    Text(String),
}

impl PropertyValue {
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            PropertyValue::Item(item) => Some(item.as_ref()),
            _ => None,
        }
    }

    pub fn as_uri(&self) -> Option<&Uri> {
        match self {
            PropertyValue::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// String form of a URI or text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Uri(uri) => Some(uri.as_str()),
            PropertyValue::Text(text) => Some(text.as_str()),
            PropertyValue::Item(_) => None,
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(self, PropertyValue::Item(_))
    }
}

impl From<Item> for PropertyValue {
    fn from(item: Item) -> Self {
        PropertyValue::Item(Arc::new(item))
    }
}

impl From<Arc<Item>> for PropertyValue {
    fn from(item: Arc<Item>) -> Self {
        PropertyValue::Item(item)
    }
}

impl From<Uri> for PropertyValue {
    fn from(uri: Uri) -> Self {
        PropertyValue::Uri(uri)
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Text(text)
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

/// A microdata item
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty")]
    itemtype: Vec<Uri>,

    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    itemid: Option<Uri>,

    /// Property name to values, both in insertion order
    properties: IndexMap<String, Vec<PropertyValue>>,
}

impl Item {
    /// Create an empty item with the given types and identifier
    pub fn new(itemtype: Vec<Uri>, itemid: Option<Uri>) -> Self {
        Self {
            itemtype,
            itemid,
            properties: IndexMap::new(),
        }
    }

    /// Build an item from raw `itemtype` and `itemid` attribute values.
    ///
    /// `itemtype` is split on ASCII whitespace. A blank `itemid` counts as absent;
    /// any other value is kept as written.
    pub fn from_attributes(itemtype: Option<&str>, itemid: Option<&str>) -> Self {
        let itemtype = itemtype
            .map(|types| types.split_ascii_whitespace().map(Uri::from).collect())
            .unwrap_or_default();
        let itemid = itemid
            .filter(|id| !id.trim_ascii().is_empty())
            .map(Uri::from);
        Self::new(itemtype, itemid)
    }

    pub fn itemtype(&self) -> &[Uri] {
        &self.itemtype
    }

    pub fn itemid(&self) -> Option<&Uri> {
        self.itemid.as_ref()
    }

    /// Check whether any of the item's types equals `uri`
    pub fn has_type(&self, uri: &str) -> bool {
        self.itemtype.iter().any(|t| t.as_str() == uri)
    }

    /// Append a value under `name`; existing values are kept
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// First value of a property, if any
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.get_all(name).first()
    }

    /// All values of a property in insertion order; empty when unset
    pub fn get_all(&self, name: &str) -> &[PropertyValue] {
        self.properties.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over `(name, values)` pairs in insertion order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &[PropertyValue])> {
        self.properties
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of distinct property names
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
