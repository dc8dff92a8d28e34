use std::{fs, path::Path};

use super::error::SiteError;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Wraps template text, checking that both placeholders are present.
    pub fn new(text: impl Into<String>) -> Result<Self, SiteError> {
        let text = text.into();
        for placeholder in [TITLE_PLACEHOLDER, CONTENT_PLACEHOLDER] {
            if !text.contains(placeholder) {
                return Err(SiteError::TemplateMissingPlaceholder(placeholder));
            }
        }
        Ok(Self { text })
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let text = fs::read_to_string(path).map_err(SiteError::io(path))?;
        Self::new(text)
    }

    /// Substitutes every occurrence of both placeholders.
    pub fn fill(&self, title: &str, content: &str) -> String {
        self.text
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

/// Prefixes root-relative `href="/` and `src="/` attributes with `basepath`.
///
/// `basepath` is expected to start and end with `/`; `/` itself is a no-op.
pub fn rewrite_basepath(html: &str, basepath: &str) -> String {
    if basepath == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{basepath}"))
        .replace("src=\"/", &format!("src=\"{basepath}"))
}
