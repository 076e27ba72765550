//! # microdata
//!
//! A Rust library for extracting HTML microdata (`itemscope`, `itemtype`,
//! `itemid`, `itemprop`) into typed item trees, following the WHATWG microdata
//! extraction model.
//!
//! ## Features
//!
//! - **Scope Extraction**: links each `itemprop` to its nearest open item, through
//!   any number of unmarked wrapper elements
//! - **Dual-Role Elements**: an element with both `itemprop` and `itemscope` becomes a nested item
//! - **Unlinked Recovery**: itemscope subtrees no `itemprop` refers to are returned as top-level items
//! - **Tag-Aware Values**: `href`/`src`/`data` become URIs, `meta`/`time` read their attribute,
//!   everything else uses its text with `<script>` content excluded
//! - **Stable Output**: properties keep insertion order and serialize to a canonical JSON shape
//!
//! ## Library Usage
//!
//! ### Parsing HTML
//!
//! ```rust
//! # #[cfg(feature = "html")]
//! # fn main() -> microdata::Result<()> {
//! use microdata::{ExtractOptions, html};
//!
//! let page = r#"
//!     <div itemscope itemtype="http://schema.org/Person">
//!         <span itemprop="name">Jane Doe</span>
//!         <img itemprop="image" src="janedoe.jpg">
//!     </div>"#;
//!
//! let items = html::items_from_html(page, &ExtractOptions::default())?;
//! assert_eq!(items[0].get("name").and_then(|v| v.as_text()), Some("Jane Doe"));
//! println!("{}", items[0].to_json()?);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "html"))]
//! # fn main() {}
//! ```
//!
//! ### Bringing Your Own Tree
//!
//! Any parsed tree can be walked by implementing [`DomNode`]; the crate ships
//! an implementation for its owned [`Node`] tree:
//!
//! ```rust
//! use microdata::{ElementNode, Node, get_items};
//!
//! # fn main() -> microdata::Result<()> {
//! let root = Node::from(
//!     ElementNode::new("div")
//!         .with_attribute("itemscope", "")
//!         .with_child(ElementNode::new("div").with_child(
//!             ElementNode::new("span").with_attribute("itemprop", "name").with_text("Jane Doe"),
//!         )),
//! );
//!
//! let items = get_items(&root)?;
//! assert_eq!(items[0].get("name").and_then(|v| v.as_text()), Some("Jane Doe"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: the [`DomNode`] adapter trait and an owned, serializable tree
//! - [`extract`]: the scope walk, value resolution and extraction options
//! - [`item`]: items, property values, URIs and canonical serialization
//! - [`error`]: Error types and result aliases
//! - `html`: `scraper`-backed HTML parsing (requires the `html` feature)

pub mod dom;
pub mod error;
pub mod extract;
pub mod item;

#[cfg(feature = "html")]
pub mod html;

pub use dom::{DomNode, DomTree, ElementNode, Node, NodeKind};
pub use error::{MicrodataError, Result};
pub use extract::{
    ExtractOptions, Extractor, ItempropTokens, ValuePolicy, get_items, get_items_with,
};
pub use item::{Item, ItemDocument, PropertyValue, Uri, serialize};

#[cfg(feature = "html")]
pub use html::{HtmlNode, items_from_html};
