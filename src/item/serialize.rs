use crate::error::Result;
use crate::item::Item;
use serde::Serialize;
use serde_json::Value;

/// Canonical structured form of an item.
///
/// ```text
/// { "type": [...]?, "id": "..."?, "properties": { "<name>": [ <string> | <object>, ... ] } }
/// ```
///
/// `type` is omitted when the item has no types and `id` when it has no
/// identifier. Nested items recurse into the same shape.
pub fn serialize(item: &Item) -> Result<Value> {
    Ok(serde_json::to_value(item)?)
}

/// Top-level output envelope: `{"items": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemDocument {
    pub items: Vec<Item>,
}

impl ItemDocument {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Vec<Item>> for ItemDocument {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl Item {
    /// Canonical structured form, see [`serialize`]
    pub fn to_value(&self) -> Result<Value> {
        serialize(self)
    }

    /// Canonical form as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
