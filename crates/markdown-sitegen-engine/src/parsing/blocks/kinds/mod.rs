//! Block-specific types that own their syntax markers.
//!
//! The classifier and compiler call into these; neither hardcodes `> ` or
//! a fence string.

pub mod code_fence;
pub mod heading;
pub mod list;
pub mod quote;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use quote::BlockQuote;
