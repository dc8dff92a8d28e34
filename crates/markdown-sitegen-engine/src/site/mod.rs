//! # Site Generation
//!
//! File-system glue around the parsing core: copies static assets, walks
//! the content tree and writes one templated HTML page per Markdown file.

pub mod copy;
pub mod error;
pub mod generate;
pub mod template;

pub use copy::copy_static;
pub use error::{PageError, SiteError};
pub use generate::{BuildReport, SiteLayout, build_site, generate_page, generate_pages_recursive};
pub use template::{Template, rewrite_basepath};
