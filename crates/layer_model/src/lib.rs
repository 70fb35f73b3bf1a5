//! Layer Model - Layer tree structure and pure tree operations
//!
//! This crate provides the layer tree of a design document: pages own ordered
//! trees of [`LayerNode`]s. Queries borrow a forest (a page's children) and
//! never mutate it; mutations return a brand-new forest with the change
//! applied and silently no-op when the target id is unknown.

mod node_id;
mod node;
mod query;
mod mutate;
mod document;
mod error;

pub use node_id::*;
pub use node::*;
pub use query::*;
pub use mutate::*;
pub use document::*;
pub use error::*;
