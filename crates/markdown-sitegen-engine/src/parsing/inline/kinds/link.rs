use std::sync::OnceLock;

use regex::Regex;

/// Link and image syntax with owned patterns.
///
/// Neither pattern nests or escapes: the label excludes `[`/`]` and the
/// target excludes `(`/`)`.
pub struct LinkSyntax;

impl LinkSyntax {
    /// Marker that turns a link into an image.
    pub const BANG: char = '!';

    pub const IMAGE_PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";
    pub const LINK_PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^\(\)]*)\)";

    pub fn image_regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::IMAGE_PATTERN).expect("Invalid image regex"))
    }

    /// Matches `[text](url)`. Callers reject matches preceded by [`Self::BANG`];
    /// the regex crate has no lookbehind.
    pub fn link_regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::LINK_PATTERN).expect("Invalid link regex"))
    }

    /// Whether a link match starting at `start` in `text` is really an image.
    pub fn preceded_by_bang(text: &str, start: usize) -> bool {
        text[..start].ends_with(Self::BANG)
    }
}
