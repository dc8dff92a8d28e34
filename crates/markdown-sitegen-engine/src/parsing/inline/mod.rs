//! # Inline Parsing
//!
//! Layered delimiter passes over a block's inline text.
//!
//! ## Architecture
//!
//! Inline parsing runs only on paragraph content. The text starts as one
//! `Plain` span; each pass re-splits the `Plain` spans it is given and
//! passes every other span through untouched.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and `SpanKind`
//! - **`kinds`**: owned delimiters and link/image patterns
//! - **`parser`**: `tokenize()` main entry point and the individual passes
//!
//! ## Pass Precedence
//!
//! Bold, italic, code, image, link. `` `[x](y)` `` is a single code span;
//! `![a](b)` is an image, never a link preceded by `!`.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{extract_images, extract_links, tokenize};
pub use types::{InlineSpan, SpanKind};
