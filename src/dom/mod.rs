//! Document tree access
//!
//! This module provides the view of a parsed document that extraction works on:
//! - DomNode: the adapter trait any tree source implements
//! - Node / ElementNode: an owned, serializable tree implementing DomNode
//! - DomTree: document wrapper with JSON loading and item extraction

pub mod adapter;
pub mod node;
pub mod tree;

pub use adapter::{DomNode, NodeKind, normalize_tag};
pub use node::{ElementNode, Node};
pub use tree::DomTree;
