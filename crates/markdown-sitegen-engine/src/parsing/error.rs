use super::inline::SpanKind;

/// Errors raised while turning Markdown into a node tree.
///
/// Every variant is fatal for the document being compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid Markdown syntax: unmatched delimiter '{delimiter}' in text '{text}'")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("{kind:?} span '{text}' requires a URL")]
    MissingUrl { kind: SpanKind, text: String },

    #[error("No top-level '# ' heading found to use as the page title")]
    MissingTitle,

    #[error("Unsupported block type: {0}")]
    UnsupportedBlockType(String),
}
