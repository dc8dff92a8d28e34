use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use relative_path::RelativePathBuf;

use super::{
    copy::{copy_static, sorted_entries},
    error::{PageError, SiteError},
    template::{Template, rewrite_basepath},
};
use crate::parsing::{compile_document, extract_title};

/// Where a site build reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub basepath: String,
}

/// What a completed build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub assets_copied: usize,
    pub pages: Vec<PathBuf>,
}

/// Renders one Markdown document into a full page.
pub fn generate_page(
    markdown: &str,
    template: &Template,
    basepath: &str,
) -> Result<String, PageError> {
    let content = compile_document(markdown)?.render()?;
    let title = extract_title(markdown)?;
    Ok(rewrite_basepath(&template.fill(&title, &content), basepath))
}

/// Generates `<name>.html` under `dest_dir` for every `<name>.md` under `content_dir`.
///
/// The directory structure is mirrored. Non-Markdown files are skipped.
/// The first document that fails aborts the build.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    basepath: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::InvalidSourceDir(content_dir.to_path_buf()));
    }

    let mut sources = Vec::new();
    scan_markdown_recursive(content_dir, &mut sources)?;

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let relative = content_relative(content_dir, &source)?;
        let target = relative.with_extension("html").to_path(dest_dir);
        generate_page_file(&source, template, &target, basepath)?;
        written.push(target);
    }
    Ok(written)
}

/// Copies static assets, then generates every page.
pub fn build_site(layout: &SiteLayout) -> Result<BuildReport, SiteError> {
    let template = Template::load(&layout.template)?;
    let assets_copied = copy_static(&layout.static_dir, &layout.output_dir)?;
    let pages = generate_pages_recursive(
        &layout.content_dir,
        &template,
        &layout.output_dir,
        &layout.basepath,
    )?;
    Ok(BuildReport {
        assets_copied,
        pages,
    })
}

fn generate_page_file(
    source: &Path,
    template: &Template,
    target: &Path,
    basepath: &str,
) -> Result<(), SiteError> {
    info!(
        "Generating page from {} to {}",
        source.display(),
        target.display()
    );
    let markdown = fs::read_to_string(source).map_err(SiteError::io(source))?;
    let page =
        generate_page(&markdown, template, basepath).map_err(|source_err| SiteError::Page {
            path: source.to_path_buf(),
            source: source_err,
        })?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
    }
    fs::write(target, page).map_err(SiteError::io(target))
}

fn content_relative(content_dir: &Path, source: &Path) -> Result<RelativePathBuf, SiteError> {
    let invalid = || SiteError::InvalidSourceDir(source.to_path_buf());
    let stripped = source.strip_prefix(content_dir).map_err(|_| invalid())?;
    RelativePathBuf::from_path(stripped).map_err(|_| invalid())
}

fn scan_markdown_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            debug!("Scanning {}", path.display());
            scan_markdown_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        } else {
            warn!("Skipping non-Markdown file {}", path.display());
        }
    }
    Ok(())
}
