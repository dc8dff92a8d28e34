use std::path::PathBuf;

use crate::{html::RenderError, parsing::ParseError};

/// Failure to turn one Markdown document into a page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Source directory not found: {0}")]
    InvalidSourceDir(PathBuf),
    #[error("Static directory {static_dir} and output directory {output_dir} overlap")]
    OverlappingDirs {
        static_dir: PathBuf,
        output_dir: PathBuf,
    },
    #[error("Template is missing the {0} placeholder")]
    TemplateMissingPlaceholder(&'static str),
    #[error("Failed to generate page from {path}: {source}")]
    Page { path: PathBuf, source: PageError },
}

impl SiteError {
    /// Builds a `map_err` adapter that tags an IO error with its path.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> SiteError {
        let path = path.into();
        move |source| SiteError::Io { path, source }
    }
}
