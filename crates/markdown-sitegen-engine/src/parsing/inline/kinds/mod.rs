//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The tokenizer
//! reads these constants; it never hardcodes `**` or `](`.
//!
//! ## Types
//!
//! - **`Delimiter`**: symmetric markers (`**`, `_`, `` ` ``) and the kind they produce
//! - **`LinkSyntax`**: `![alt](url)` and `[text](url)` patterns

pub mod delimiter;
pub mod link;

pub use delimiter::Delimiter;
pub use link::LinkSyntax;
