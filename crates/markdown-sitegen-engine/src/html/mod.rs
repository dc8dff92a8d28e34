//! # HTML Node Tree
//!
//! The output model: a strict tree of [`HtmlNode`]s serialised with
//! [`HtmlNode::render`]. Attribute values are emitted as-is, without
//! escaping.

pub mod attributes;
pub mod error;
pub mod node;

pub use attributes::Attributes;
pub use error::RenderError;
pub use node::HtmlNode;
