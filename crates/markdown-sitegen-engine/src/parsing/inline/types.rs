/// The semantic role of an [`InlineSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text outside any recognised construct.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` `` - a raw zone, later passes never look inside it.
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl SpanKind {
    /// Whether spans of this kind must carry a URL.
    pub fn requires_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// A run of text carrying exactly one [`SpanKind`].
///
/// `url` is `Some` exactly when `kind` is `Link` or `Image`. The named
/// constructors uphold that; building the struct by hand can break it, which
/// the compiler reports as a missing URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl InlineSpan {
    fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Code)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(text, SpanKind::Link)
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(alt, SpanKind::Image)
        }
    }

    /// A span of the given delimited kind (`Plain`, `Bold`, `Italic` or `Code`).
    pub(crate) fn delimited(text: impl Into<String>, kind: SpanKind) -> Self {
        debug_assert!(!kind.requires_url());
        Self::new(text, kind)
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_compare_by_value() {
        assert_eq!(InlineSpan::bold("text"), InlineSpan::bold("text"));
        assert_ne!(InlineSpan::bold("text"), InlineSpan::italic("text"));
    }

    #[test]
    fn url_takes_part_in_equality() {
        let bare = InlineSpan {
            text: "home".into(),
            kind: SpanKind::Link,
            url: None,
        };
        assert_ne!(bare, InlineSpan::link("home", "https://example.com"));
    }

    #[test]
    fn only_links_and_images_carry_urls() {
        assert!(InlineSpan::plain("a").url.is_none());
        assert!(InlineSpan::code("a").url.is_none());
        assert_eq!(
            InlineSpan::image("alt", "/cat.png").url.as_deref(),
            Some("/cat.png")
        );
        assert!(SpanKind::Link.requires_url());
        assert!(!SpanKind::Bold.requires_url());
    }
}
