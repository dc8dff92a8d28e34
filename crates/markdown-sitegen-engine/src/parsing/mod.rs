//! # Markdown Parsing
//!
//! Block grammar on the outside, inline grammar inside paragraphs.
//!
//! - **`blocks`**: blank-line segmentation and block classification
//! - **`inline`**: delimiter/link tokenizer producing `InlineSpan`s
//! - **`compile`**: turns classified blocks into an `HtmlNode` tree
//! - **`error`**: `ParseError`

pub mod blocks;
pub mod compile;
pub mod error;
pub mod inline;

pub use compile::{block_to_node, compile_document, extract_title, span_to_node};
pub use error::ParseError;
