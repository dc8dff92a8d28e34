pub mod html;
pub mod parsing;
pub mod site;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, RenderError};
pub use parsing::{
    ParseError,
    blocks::{BlockType, classify, segment},
    compile_document, extract_title,
    inline::{InlineSpan, SpanKind, tokenize},
};
pub use site::{BuildReport, SiteError, SiteLayout, Template, build_site};
